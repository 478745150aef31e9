//! Correctness oracle backed by [`num_bigint`].
//!
//! Translates fixed-width limb vectors to and from arbitrary-precision integers so that results
//! of the fixed-width kernels can be compared against an independent implementation. Nothing in
//! here belongs in a timed region.

use crate::{Limb, U256, U512, Uint};
use alloc::{string::String, vec::Vec};
use core::fmt;
use num_bigint::BigUint;

/// Import a little-endian limb vector as a [`BigUint`].
pub fn to_biguint<const LIMBS: usize>(uint: &Uint<LIMBS>) -> BigUint {
    BigUint::from_slice(&uint.to_words())
}

/// Export a [`BigUint`] as a `LIMBS` wide limb vector, or `None` if it does not fit.
pub fn from_biguint<const LIMBS: usize>(big_uint: &BigUint) -> Option<Uint<LIMBS>> {
    let digits = big_uint.to_u32_digits();
    if digits.len() > LIMBS {
        return None;
    }

    let mut limbs = [Limb::ZERO; LIMBS];
    for (limb, digit) in limbs.iter_mut().zip(digits) {
        *limb = Limb(digit);
    }
    Some(limbs.into())
}

/// Exact product `a * b`.
pub fn expected_product(a: &U256, b: &U256) -> BigUint {
    to_biguint(a) * to_biguint(b)
}

/// Exact residue of `x` modulo `2^bits - 1`.
///
/// # Panics
/// If `bits` is zero.
pub fn expected_residue<const LIMBS: usize>(x: &Uint<LIMBS>, bits: u32) -> BigUint {
    assert!(bits > 0, "modulus 2^0 - 1 is zero");
    let modulus = (BigUint::from(1u32) << bits) - 1u32;
    to_biguint(x) % modulus
}

/// Outcome of comparing a kernel result with the oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The kernel result is exact.
    Pass,

    /// The kernel result differs from the oracle.
    Mismatch {
        /// Value computed by the oracle.
        expected: BigUint,
        /// Value computed by the kernel.
        actual: BigUint,
    },
}

impl Verdict {
    /// Compare `actual` against `expected`.
    pub fn new(expected: BigUint, actual: BigUint) -> Self {
        if expected == actual {
            Self::Pass
        } else {
            log::warn!("oracle mismatch: expected {expected:x}, got {actual:x}");
            Self::Mismatch { expected, actual }
        }
    }

    /// Did the kernel agree with the oracle?
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Hex-digit diff of a mismatch: one character per digit of the zero-padded hex
    /// representations, `0` where they agree and `1` where they differ.
    ///
    /// Both sides are padded to the longer of the two and to at least 128 digits. Returns `None`
    /// for [`Verdict::Pass`].
    pub fn diff_bits(&self) -> Option<String> {
        let Self::Mismatch { expected, actual } = self else {
            return None;
        };

        let expected = expected.to_str_radix(16);
        let actual = actual.to_str_radix(16);
        let width = expected.len().max(actual.len()).max(128);

        let expected = left_pad(&expected, width);
        let actual = left_pad(&actual, width);

        Some(
            expected
                .iter()
                .zip(&actual)
                .map(|(e, a)| if e == a { '0' } else { '1' })
                .collect(),
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Passed"),
            Self::Mismatch { expected, actual } => {
                writeln!(f, "expected: {expected:x}")?;
                write!(f, "actual  : {actual:x}")
            }
        }
    }
}

/// Check `product == a * b`.
pub fn check_product(a: &U256, b: &U256, product: &U512) -> Verdict {
    Verdict::new(expected_product(a, b), to_biguint(product))
}

/// Check that `residue` is the canonical residue of `x` modulo `2^bits - 1`.
pub fn check_residue<const LIMBS: usize, const RESIDUE_LIMBS: usize>(
    x: &Uint<LIMBS>,
    bits: u32,
    residue: &Uint<RESIDUE_LIMBS>,
) -> Verdict {
    Verdict::new(expected_residue(x, bits), to_biguint(residue))
}

fn left_pad(digits: &str, width: usize) -> Vec<u8> {
    let mut padded = Vec::with_capacity(width);
    padded.resize(width - digits.len(), b'0');
    padded.extend_from_slice(digits.as_bytes());
    padded
}
