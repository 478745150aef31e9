//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// Borrows are masks: [`Limb::ZERO`] for none, [`Limb::MAX`] for a borrow.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}
