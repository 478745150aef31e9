//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};

impl Limb {
    /// Computes `(self * rhs) + addend + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Compute "wide" multiplication, with a product twice the size of the input.
    ///
    /// Returns a tuple containing the `(lo, hi)` components of the product.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(&self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn widening_mul() {
        assert_eq!(Limb(3).widening_mul(Limb(7)), (Limb(21), Limb::ZERO));
        assert_eq!(Limb::MAX.widening_mul(Limb(2)), (Limb(0xFFFF_FFFE), Limb::ONE));
    }

    #[test]
    fn carrying_mul_add_max() {
        let (lo, hi) = Limb::MAX.carrying_mul_add(Limb::MAX, Limb::MAX, Limb::MAX);
        assert_eq!(lo, Limb::MAX);
        assert_eq!(hi, Limb::MAX);
    }
}
