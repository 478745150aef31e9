use crate::{Limb, U256, U512, U1024, uint::slice};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Reduce `x` modulo `2^256 - 1` in place.
///
/// The high 256 bits are folded into the low 256 bits with end-around carry, and the upper eight
/// limbs of `x` are cleared. The result is canonical: a residue equal to the modulus (all ones) is
/// replaced with zero, so `x < 2^256 - 1` on return.
pub fn reduce_mod_2p256_minus_1(x: &mut U512) {
    let (lo, hi) = x.as_limbs_mut().split_at_mut(U256::LIMBS);
    fold_end_around(lo, hi);
    hi.fill(Limb::ZERO);
}

/// Reduce the 1024-bit `x` modulo `2^512 - 1`, returning the canonical 512-bit residue.
pub fn reduce_mod_2p512_minus_1(x: &U1024) -> U512 {
    let (mut lo, hi) = x.split();
    fold_end_around(lo.as_limbs_mut(), hi.as_limbs());
    lo
}

impl U512 {
    /// Compute `self mod (2^256 - 1)`.
    pub fn rem_2p256_minus_1(&self) -> U256 {
        let mut x = *self;
        reduce_mod_2p256_minus_1(&mut x);
        x.split().0
    }
}

impl U1024 {
    /// Compute `self mod (2^512 - 1)`.
    pub fn rem_2p512_minus_1(&self) -> U512 {
        reduce_mod_2p512_minus_1(self)
    }
}

/// Fold `hi` into `lo` modulo `2^(32 * lo.len()) - 1`, leaving the canonical residue in `lo`.
///
/// `lo + hi <= 2 * (2^k - 1)`, so after the first wrap the low half is at most `2^k - 2` and adding
/// the carry back in cannot carry again. The carry is propagated through every limb regardless
/// of its value.
fn fold_end_around(lo: &mut [Limb], hi: &[Limb]) {
    let mut carry = slice::add_assign(lo, hi);

    for limb in lo.iter_mut() {
        (*limb, carry) = limb.overflowing_add(carry);
    }
    debug_assert!(carry.is_zero_vartime(), "end-around carry wrapped twice");

    let is_modulus = is_all_ones(lo);
    for limb in lo.iter_mut() {
        limb.conditional_assign(&Limb::ZERO, is_modulus);
    }
}

/// Constant-time check that every bit of `limbs` is set.
fn is_all_ones(limbs: &[Limb]) -> Choice {
    let mut acc = Limb::MAX.0;
    for limb in limbs {
        acc &= limb.0;
    }
    acc.ct_eq(&Limb::MAX.0)
}
