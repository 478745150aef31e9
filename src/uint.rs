//! Fixed-width unsigned integers.

#![allow(clippy::needless_range_loop, clippy::many_single_char_names)]

#[macro_use]
mod split;

mod add;
mod cmp;
mod encoding;
mod mul;
mod sub;

/// Limb-vector primitives over raw slices.
pub mod slice;

#[cfg(feature = "rand_core")]
mod rand;

pub use self::mul::{
    KaratsubaTerms, Mul128, ProductScanning, Schoolbook, karatsuba_terms, mul_karatsuba_512,
};

use crate::{Limb, Word};
use core::fmt;
use subtle::{Choice, ConditionallySelectable};

/// Fixed-width unsigned integer.
///
/// Generic over the given number of 32-bit `LIMBS`, stored least significant limb first. The
/// value represented is `sum(limbs[i] * 2^(32 * i))`.
///
/// The widths used by the multiplication and reduction kernels have aliases: [`U128`] (a
/// Karatsuba half), [`U256`] (an operand), [`U512`] (a product) and [`U1024`].
#[derive(Copy, Clone, Hash)]
pub struct Uint<const LIMBS: usize> {
    /// Inner limb array. Stored from least significant to most significant.
    limbs: [Limb; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self::from_u32(0);

    /// The value `1`.
    pub const ONE: Self = Self::from_u32(1);

    /// Maximum value this [`Uint`] can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = LIMBS as u32 * Limb::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = LIMBS * Limb::BYTES;

    /// The number of limbs.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly [`Uint`] constructor.
    pub const fn new(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`Uint`] from an array of [`Word`]s, least significant first.
    #[inline]
    pub const fn from_words(arr: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(arr[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of [`Word`]s from a [`Uint`], least significant first.
    #[inline]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut arr = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            arr[i] = self.limbs[i].0;
            i += 1;
        }

        arr
    }

    /// Create a [`Uint`] from a `u32`.
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        if LIMBS > 0 {
            limbs[0].0 = n;
        }
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u64`.
    ///
    /// # Panics
    /// If `n` does not fit (only possible when `LIMBS < 2`).
    pub const fn from_u64(n: u64) -> Self {
        assert!(LIMBS >= 2 || n >> 32 == 0, "u64 value does not fit");
        let mut limbs = [Limb::ZERO; LIMBS];
        if LIMBS > 0 {
            limbs[0].0 = n as Word;
        }
        if LIMBS > 1 {
            limbs[1].0 = (n >> Limb::BITS) as Word;
        }
        Self { limbs }
    }

    /// Borrow the limbs of this [`Uint`].
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`Uint`] mutably.
    pub const fn as_limbs_mut(&mut self) -> &mut [Limb; LIMBS] {
        &mut self.limbs
    }

    /// Is this value zero? Variable-time.
    pub const fn is_zero_vartime(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.limbs[i].0 != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Zero-extend or truncate to a different number of limbs.
    pub const fn resize<const T: usize>(&self) -> Uint<T> {
        let mut limbs = [Limb::ZERO; T];
        let mut i = 0;
        while i < LIMBS && i < T {
            limbs[i] = self.limbs[i];
            i += 1;
        }
        Uint { limbs }
    }
}

impl<const LIMBS: usize> AsRef<[Limb]> for Uint<LIMBS> {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl<const LIMBS: usize> AsMut<[Limb]> for Uint<LIMBS> {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl<const LIMBS: usize> From<[Limb; LIMBS]> for Uint<LIMBS> {
    fn from(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }
}

impl<const LIMBS: usize> From<Uint<LIMBS>> for [Limb; LIMBS] {
    fn from(n: Uint<LIMBS>) -> [Limb; LIMBS] {
        n.limbs
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08x}", limb.0)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08X}", limb.0)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::DefaultIsZeroes for Uint<LIMBS> {}

macro_rules! impl_uint_aliases {
    ($(($name:ident, $limbs:expr, $doc:expr)),+) => {
        $(
            #[doc = $doc]
            #[doc = "unsigned integer."]
            pub type $name = Uint<$limbs>;
        )+
     };
}

impl_uint_aliases! {
    (U128, 4, "128-bit"),
    (U256, 8, "256-bit"),
    (U512, 16, "512-bit"),
    (U1024, 32, "1024-bit")
}

impl_split! {
    (U256, U128),
    (U512, U256),
    (U1024, U512)
}
