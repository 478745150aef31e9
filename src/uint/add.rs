//! [`Uint`] addition operations.

use super::{Uint, slice};
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs`, returning the result along with the carry out of the top limb.
    #[inline(always)]
    pub const fn carrying_add(&self, rhs: &Self) -> (Self, Limb) {
        let mut limbs = self.limbs;
        let carry = slice::add_assign(&mut limbs, &rhs.limbs);
        (Self { limbs }, carry)
    }

    /// Perform wrapping addition, discarding overflow.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.carrying_add(rhs).0
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U128};

    #[test]
    fn carrying_add_no_carry() {
        let (res, carry) = U128::ZERO.carrying_add(&U128::ONE);
        assert_eq!(res, U128::ONE);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn carrying_add_with_carry() {
        let (res, carry) = U128::MAX.carrying_add(&U128::ONE);
        assert_eq!(res, U128::ZERO);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn wrapping_add_with_carry() {
        assert_eq!(U128::MAX.wrapping_add(&U128::ONE), U128::ZERO);
    }
}
