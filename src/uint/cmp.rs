//! [`Uint`] comparison operations.
//!
//! Constant-time unless explicitly noted otherwise.

use core::cmp::Ordering;

use super::Uint;
use subtle::{Choice, ConstantTimeEq};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns the Ordering between `self` and `rhs` in variable time.
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            let (a, b) = (self.limbs[i].0, rhs.limbs[i].0);
            if a != b {
                return if a < b {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }
        Ordering::Equal
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0;

        for i in 0..LIMBS {
            acc |= self.limbs[i].0 ^ other.limbs[i].0;
        }

        // acc == 0 if and only if self == other
        acc.ct_eq(&0)
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::{U128, U256};
    use core::cmp::Ordering;
    use subtle::ConstantTimeEq;

    #[test]
    fn ct_eq() {
        let a = U128::ZERO;
        let b = U128::MAX;

        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
        assert!(!bool::from(b.ct_eq(&a)));
        assert!(bool::from(b.ct_eq(&b)));
    }

    #[test]
    fn cmp_vartime() {
        let a = U256::ZERO;
        let b = U256::ONE;
        let c = U256::MAX;

        assert_eq!(a.cmp_vartime(&b), Ordering::Less);
        assert_eq!(c.cmp_vartime(&b), Ordering::Greater);
        assert_eq!(b.cmp_vartime(&b), Ordering::Equal);
    }

    #[test]
    fn cmp_looks_at_high_limbs_first() {
        let a = U128::from_words([u32::MAX, 0, 0, 0]);
        let b = U128::from_words([0, 0, 0, 1]);
        assert!(a < b);
    }
}
