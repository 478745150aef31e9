//! Karatsuba multiplication of 256-bit operands into a 512-bit product.

use super::product_scanning;
use crate::{Limb, U128, U256, U512, uint::slice};

/// Limbs in a Karatsuba half.
const HALF: usize = U128::LIMBS;

/// Full 256-bit product of two 128-bit operands.
///
/// This is the only multiplication the Karatsuba layer delegates: any implementation with this
/// contract can be substituted for the two half products without changing the algorithm above
/// it.
pub trait Mul128 {
    /// Compute `lhs * rhs` exactly.
    fn mul_wide(lhs: &U128, rhs: &U128) -> U256;
}

/// Portable row-by-row schoolbook [`Mul128`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Schoolbook;

impl Mul128 for Schoolbook {
    #[inline(always)]
    fn mul_wide(lhs: &U128, rhs: &U128) -> U256 {
        lhs.schoolbook_mul(rhs)
    }
}

/// Column-wise product-scanning [`Mul128`], the optimized backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductScanning;

impl Mul128 for ProductScanning {
    #[inline(always)]
    fn mul_wide(lhs: &U128, rhs: &U128) -> U256 {
        let mut out = U256::ZERO;
        product_scanning::mul_wide(&lhs.limbs, &rhs.limbs, &mut out.limbs);
        out
    }
}

/// The three sub-products of a Karatsuba multiplication.
///
/// With `b = 2^128`, `a = a0 + a1 * b` and `c = c0 + c1 * b`:
///
/// ```text
/// z0 = a0 * c0
/// z2 = a1 * c1
/// z1 = (a0 + a1) * (c0 + c1) - z0 - z2 = a0 * c1 + a1 * c0
///
/// a * c = z0 + z1 * b + z2 * b^2
/// ```
///
/// `z1` is always nonnegative and below `2^258`, so it fits in the low nine of its limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KaratsubaTerms {
    /// Product of the low halves.
    pub z0: U256,
    /// Cross term `a0 * c1 + a1 * c0`.
    pub z1: U512,
    /// Product of the high halves.
    pub z2: U256,
}

impl KaratsubaTerms {
    /// Sum the terms at their limb offsets into a 512-bit product.
    ///
    /// Returns the product along with an overflow indicator which is nonzero if the terms do not
    /// describe a product that fits: either `z1` has bits above its twelfth limb, or a carry
    /// escaped the top of the buffer. Terms computed by [`karatsuba_terms`] never overflow.
    pub fn recombine(&self) -> (U512, Limb) {
        let mut out: U512 = self.z0.resize();
        let z1 = self.z1.as_limbs();

        let mut lost = Limb::ZERO;
        for limb in &z1[3 * HALF..] {
            lost.0 |= limb.0;
        }

        let c1 = slice::add_assign_extended(&mut out.limbs[HALF..], &z1[..3 * HALF]);
        let c2 = slice::add_assign_extended(&mut out.limbs[2 * HALF..], self.z2.as_limbs());

        (out, Limb(lost.0 | c1.0 | c2.0))
    }
}

/// Compute the Karatsuba sub-products of `a * b`, using `M` for the two half products.
///
/// The half sums `a0 + a1` and `b0 + b1` can each carry into a fifth limb. Rather than dropping
/// that bit, the sums are zero-extended to 256 bits and the cross product is taken with the
/// 8-limb schoolbook multiplier.
///
/// Returns the terms and the borrow of `cross - z0 - z2`, which is zero for every input: a
/// nonzero borrow means the arithmetic above is broken.
pub fn karatsuba_terms<M: Mul128>(a: &U256, b: &U256) -> (KaratsubaTerms, Limb) {
    let (a0, a1) = a.split();
    let (b0, b1) = b.split();

    let z0 = M::mul_wide(&a0, &b0);
    let z2 = M::mul_wide(&a1, &b1);

    let asum = half_sum(&a0, &a1);
    let bsum = half_sum(&b0, &b1);

    let z0_wide: U512 = z0.resize();
    let z2_wide: U512 = z2.resize();

    let mut z1 = asum.schoolbook_mul(&bsum);
    let borrow0 = slice::sub_assign(&mut z1.limbs, &z0_wide.limbs);
    let borrow2 = slice::sub_assign(&mut z1.limbs, &z2_wide.limbs);

    (KaratsubaTerms { z0, z1, z2 }, Limb(borrow0.0 | borrow2.0))
}

/// Multiply two 256-bit operands into their exact 512-bit product with one level of Karatsuba
/// over 128-bit halves, using `M` for the half products.
///
/// Debug builds assert that the cross term never underflows and that recombination never
/// overflows.
pub fn mul_karatsuba_512<M: Mul128>(a: &U256, b: &U256) -> U512 {
    let (terms, borrow) = karatsuba_terms::<M>(a, b);
    debug_assert!(borrow.is_zero_vartime(), "Karatsuba cross term underflowed");

    let (product, overflow) = terms.recombine();
    debug_assert!(overflow.is_zero_vartime(), "Karatsuba recombination overflowed");

    product
}

/// `lo + hi`, with the carry kept in limb 4 of the widened result.
#[inline(always)]
fn half_sum(lo: &U128, hi: &U128) -> U256 {
    let (sum, carry) = lo.carrying_add(hi);
    let mut out: U256 = sum.resize();
    out.limbs[HALF] = carry;
    out
}

#[cfg(test)]
mod tests {
    use super::{
        KaratsubaTerms, ProductScanning, Schoolbook, half_sum, karatsuba_terms,
        mul_karatsuba_512,
    };
    use crate::{Limb, U128, U256, U512};

    #[test]
    fn half_sum_keeps_carry() {
        let sum = half_sum(&U128::MAX, &U128::ONE);
        assert_eq!(sum.as_limbs()[..4], [Limb::ZERO; 4]);
        assert_eq!(sum.as_limbs()[4], Limb::ONE);
        assert_eq!(sum.as_limbs()[5..], [Limb::ZERO; 3]);
    }

    #[test]
    fn one_times_b_is_b_zero_extended() {
        let b =
            U256::from_be_hex("0123456789abcdeffedcba98765432100f1e2d3c4b5a69788796a5b4c3d2e1f0");
        let expected: U512 = b.resize();
        assert_eq!(mul_karatsuba_512::<Schoolbook>(&U256::ONE, &b), expected);
        assert_eq!(mul_karatsuba_512::<ProductScanning>(&b, &U256::ONE), expected);
    }

    #[test]
    fn max_squared() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let mut words = [u32::MAX; 16];
        words[..8].copy_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0]);
        words[8] = 0xFFFF_FFFE;
        let expected = U512::from_words(words);

        assert_eq!(mul_karatsuba_512::<Schoolbook>(&U256::MAX, &U256::MAX), expected);
        assert_eq!(mul_karatsuba_512::<ProductScanning>(&U256::MAX, &U256::MAX), expected);
    }

    #[test]
    fn cross_term_of_saturated_halves() {
        let (terms, borrow) = karatsuba_terms::<Schoolbook>(&U256::MAX, &U256::MAX);
        assert_eq!(borrow, Limb::ZERO);

        // z1 = 2 * (2^128 - 1)^2 = 2^257 - 2^130 + 2
        let mut z1 = [0u32; 16];
        z1[0] = 2;
        z1[4] = 0xFFFF_FFFC;
        z1[5] = u32::MAX;
        z1[6] = u32::MAX;
        z1[7] = u32::MAX;
        z1[8] = 1;
        assert_eq!(terms.z1, U512::from_words(z1));
        assert_eq!(terms.z0, terms.z2);
    }

    #[test]
    fn recombine_flags_lost_high_limbs() {
        let mut z1 = U512::ZERO;
        z1.as_limbs_mut()[12] = Limb::ONE;
        let terms = KaratsubaTerms {
            z0: U256::ZERO,
            z1,
            z2: U256::ZERO,
        };
        let (_, overflow) = terms.recombine();
        assert_ne!(overflow, Limb::ZERO);
    }

    #[test]
    fn recombine_flags_carry_out() {
        let terms = KaratsubaTerms {
            z0: U256::ZERO,
            z1: U512::ZERO,
            z2: U256::MAX,
        };
        let (product, overflow) = terms.recombine();
        assert_eq!(overflow, Limb::ZERO);
        assert_eq!(product.split().1, U256::MAX);

        let terms = KaratsubaTerms {
            z0: U256::ZERO,
            z1: U256::MAX.resize::<16>().wrapping_add(&U512::ONE),
            z2: U256::MAX,
        };
        let (_, overflow) = terms.recombine();
        assert_eq!(overflow, Limb::ONE);
    }
}
