//! Big integers are represented as an array of smaller 32-bit integers called "limbs".

mod add;
mod cmp;
mod mul;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::Word;
use core::fmt;
use subtle::{Choice, ConditionallySelectable};

/// Big integers are represented as an array of smaller 32-bit integers called "limbs".
///
/// Unlike a word-sized limb, the width here is fixed on every target: all wide integers in this
/// crate are little-endian sequences of 32-bit limbs, and the multiplication kernels are written
/// against 64-bit intermediates.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = 32;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = 4;

    /// Is this limb equal to [`Limb::ZERO`]? Variable-time.
    #[inline]
    pub const fn is_zero_vartime(&self) -> bool {
        self.0 == 0
    }

    /// Serialize this limb as little endian bytes.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.0.to_le_bytes()
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}
