//! [`Uint`] subtraction operations.

use super::{Uint, slice};
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self - rhs`, returning the result along with the borrow mask
    /// ([`Limb::ZERO`] or [`Limb::MAX`]).
    #[inline(always)]
    pub const fn borrowing_sub(&self, rhs: &Self) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let borrow = slice::sub(&mut limbs, &self.limbs, &rhs.limbs);
        (Self { limbs }, borrow)
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs).0
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U128};

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = U128::ONE.borrowing_sub(&U128::ONE);
        assert_eq!(res, U128::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = U128::ZERO.borrowing_sub(&U128::ONE);
        assert_eq!(res, U128::MAX);
        assert_eq!(borrow, Limb::MAX);
    }
}
