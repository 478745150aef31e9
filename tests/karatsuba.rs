//! Equivalence tests between the Karatsuba multiplier and `num_bigint::BigUint`.

mod common;

use common::{to_biguint, to_uint};
use kara512::{
    Limb, Mul128, ProductScanning, Schoolbook, U128, U256, U512, karatsuba_terms,
    mul_karatsuba_512,
};
use proptest::prelude::*;

prop_compose! {
    fn uint()(words in any::<[u32; 8]>()) -> U256 {
        U256::from_words(words)
    }
}

prop_compose! {
    fn half()(words in any::<[u32; 4]>()) -> U128 {
        U128::from_words(words)
    }
}

/// Operands at the edges: zero, one, all ones, and saturated halves which make the half sums
/// carry into a fifth limb.
fn boundary() -> impl Strategy<Value = U256> {
    let low_half_max = U128::MAX.concat(&U128::ZERO);
    let high_half_max = U128::ZERO.concat(&U128::MAX);
    prop_oneof![
        Just(U256::ZERO),
        Just(U256::ONE),
        Just(U256::MAX),
        Just(low_half_max),
        Just(high_half_max),
        uint(),
    ]
}

fn expected(a: &U256, b: &U256) -> U512 {
    to_uint(&(to_biguint(a) * to_biguint(b)))
}

proptest! {
    #[test]
    fn product_matches_biguint(a in uint(), b in uint()) {
        let expected = expected(&a, &b);
        prop_assert_eq!(mul_karatsuba_512::<Schoolbook>(&a, &b), expected);
        prop_assert_eq!(mul_karatsuba_512::<ProductScanning>(&a, &b), expected);
    }

    #[test]
    fn product_matches_biguint_at_boundaries(a in boundary(), b in boundary()) {
        prop_assert_eq!(a.karatsuba_mul(&b), expected(&a, &b));
    }

    #[test]
    fn karatsuba_matches_schoolbook(a in uint(), b in uint()) {
        prop_assert_eq!(a.karatsuba_mul(&b), a.schoolbook_mul(&b));
    }

    #[test]
    fn commutative(a in uint(), b in uint()) {
        prop_assert_eq!(a.karatsuba_mul(&b), b.karatsuba_mul(&a));
    }

    #[test]
    fn mul128_backends_agree(a in half(), b in half()) {
        let expected = to_uint::<8>(&(to_biguint(&a) * to_biguint(&b)));
        prop_assert_eq!(Schoolbook::mul_wide(&a, &b), expected);
        prop_assert_eq!(ProductScanning::mul_wide(&a, &b), expected);
    }

    #[test]
    fn cross_term_never_borrows(a in boundary(), b in boundary()) {
        let (terms, borrow) = karatsuba_terms::<ProductScanning>(&a, &b);
        prop_assert_eq!(borrow, Limb::ZERO);

        let (a0, a1) = a.split();
        let (b0, b1) = b.split();
        let cross = to_biguint(&a0) * to_biguint(&b1) + to_biguint(&a1) * to_biguint(&b0);
        prop_assert_eq!(to_biguint(&terms.z1), cross);
    }

    #[test]
    fn recombination_never_carries_out(a in boundary(), b in boundary()) {
        let (terms, _) = karatsuba_terms::<Schoolbook>(&a, &b);
        let (product, overflow) = terms.recombine();
        prop_assert_eq!(overflow, Limb::ZERO);
        prop_assert_eq!(product, expected(&a, &b));
    }
}

#[test]
fn one_times_b_is_b() {
    let b =
        U256::from_be_hex("8000000000000000000000000000000000000000000000000000000000000001");
    let wide: U512 = b.resize();
    assert_eq!(U256::ONE.karatsuba_mul(&b), wide);
    assert_eq!(b.karatsuba_mul(&U256::ONE), wide);
}

#[test]
fn zero_annihilates() {
    assert_eq!(U256::ZERO.karatsuba_mul(&U256::MAX), U512::ZERO);
    assert_eq!(U256::MAX.karatsuba_mul(&U256::ZERO), U512::ZERO);
}

#[test]
fn saturated_halves() {
    let a = U128::MAX.concat(&U128::MAX);
    assert_eq!(a, U256::MAX);
    assert_eq!(a.karatsuba_mul(&a), expected(&a, &a));

    let low = U128::MAX.concat(&U128::ZERO);
    assert_eq!(low.karatsuba_mul(&a), expected(&low, &a));
}
