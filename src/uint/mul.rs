//! [`Uint`] multiplication operations.

pub(crate) mod karatsuba;
pub(crate) mod product_scanning;
pub(crate) mod schoolbook;

pub use self::karatsuba::{
    KaratsubaTerms, Mul128, ProductScanning, Schoolbook, karatsuba_terms, mul_karatsuba_512,
};

use crate::{U128, U256, U512, U1024};

macro_rules! impl_schoolbook_mul {
    ($(($name:ident, $wide:ident)),+) => {
        $(
            impl $name {
                #[doc = concat!(
                    "Multiply `self` by `rhs` with the schoolbook method, returning the exact [`",
                    stringify!($wide),
                    "`] product."
                )]
                #[inline]
                pub const fn schoolbook_mul(&self, rhs: &Self) -> $wide {
                    let mut out = $wide::ZERO;
                    schoolbook::mul_wide(&self.limbs, &rhs.limbs, &mut out.limbs);
                    out
                }
            }
        )+
    };
}

impl_schoolbook_mul! {
    (U128, U256),
    (U256, U512),
    (U512, U1024)
}

impl U256 {
    /// Multiply `self` by `rhs` with one level of Karatsuba, returning the exact 512-bit product.
    ///
    /// Uses the portable [`Schoolbook`] backend for the half products.
    #[inline]
    pub fn karatsuba_mul(&self, rhs: &Self) -> U512 {
        mul_karatsuba_512::<Schoolbook>(self, rhs)
    }

    /// Multiply `self` by `rhs` with one level of Karatsuba, using the [`Mul128`] backend `M`
    /// for the half products.
    #[inline]
    pub fn karatsuba_mul_with<M: Mul128>(&self, rhs: &Self) -> U512 {
        mul_karatsuba_512::<M>(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ProductScanning, U128, U256, U512};

    #[test]
    fn schoolbook_mul_small() {
        let a = U128::from_u64(0xFFFF_FFFF_FFFF_FFFF);
        let b = U128::from_u64(2);
        let expected = U256::from_words([0xFFFF_FFFE, 0xFFFF_FFFF, 1, 0, 0, 0, 0, 0]);
        assert_eq!(a.schoolbook_mul(&b), expected);
    }

    #[test]
    fn schoolbook_mul_is_commutative() {
        let a =
            U256::from_be_hex("f0e1d2c3b4a5968778695a4b3c2d1e0f00112233445566778899aabbccddeeff");
        let b =
            U256::from_be_hex("0000000100000002000000030000000400000005000000060000000700000008");
        assert_eq!(a.schoolbook_mul(&b), b.schoolbook_mul(&a));
    }

    #[test]
    fn karatsuba_matches_schoolbook() {
        let a =
            U256::from_be_hex("f0e1d2c3b4a5968778695a4b3c2d1e0f00112233445566778899aabbccddeeff");
        let b =
            U256::from_be_hex("ffffffffffffffffffffffffffffffff00000000000000000000000000000001");
        let expected = a.schoolbook_mul(&b);
        assert_eq!(a.karatsuba_mul(&b), expected);
        assert_eq!(a.karatsuba_mul_with::<ProductScanning>(&b), expected);
    }

    #[test]
    fn wide_schoolbook_max_squared() {
        // (2^512 - 1)^2 = 2^1024 - 2^513 + 1
        let product = U512::MAX.schoolbook_mul(&U512::MAX);
        let (lo, hi) = product.split();
        assert_eq!(lo, U512::ONE);
        assert_eq!(hi, U512::MAX.wrapping_sub(&U512::ONE));
    }
}
