//! Limb comparisons

use crate::Limb;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl Limb {
    /// Perform a comparison of the inner value in variable-time.
    pub fn cmp_vartime(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for Limb {}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for Limb {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for Limb {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;
    use core::cmp::Ordering;
    use subtle::ConstantTimeEq;

    #[test]
    fn ct_eq() {
        assert!(bool::from(Limb::ZERO.ct_eq(&Limb::ZERO)));
        assert!(!bool::from(Limb::ZERO.ct_eq(&Limb::ONE)));
        assert!(bool::from(Limb::MAX.ct_eq(&Limb::MAX)));
    }

    #[test]
    fn cmp() {
        assert_eq!(Limb::ZERO.cmp(&Limb::ONE), Ordering::Less);
        assert_eq!(Limb::MAX.cmp(&Limb::ONE), Ordering::Greater);
        assert_eq!(Limb::ONE.cmp(&Limb::ONE), Ordering::Equal);
    }
}
