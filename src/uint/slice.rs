//! Carry and borrow propagation over little-endian limb slices.
//!
//! These are the building blocks of the Karatsuba recombination, which needs to add a narrow
//! term into a wider buffer at a limb offset. Offsets are expressed by slicing the destination,
//! e.g. `add_assign_extended(&mut out[4..], &z1)`.

use crate::Limb;

/// Add `src` into `dst` in place, returning the carry out of the last limb.
///
/// # Panics
/// If `dst` and `src` have different lengths.
#[inline]
#[track_caller]
pub const fn add_assign(dst: &mut [Limb], src: &[Limb]) -> Limb {
    assert!(dst.len() == src.len(), "length mismatch in add_assign");

    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < dst.len() {
        (dst[i], carry) = dst[i].carrying_add(src[i], carry);
        i += 1;
    }
    carry
}

/// Add `src` into the low limbs of `dst`, then propagate the outstanding carry through the
/// remaining limbs of `dst`.
///
/// Every limb of `dst` is visited whether or not the carry has already been absorbed.
///
/// Returns the carry out of the last limb of `dst`, which is zero whenever the true sum fits.
///
/// # Panics
/// If `src` is longer than `dst`.
#[inline]
#[track_caller]
pub const fn add_assign_extended(dst: &mut [Limb], src: &[Limb]) -> Limb {
    assert!(
        src.len() <= dst.len(),
        "source is wider than destination in add_assign_extended"
    );

    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < src.len() {
        (dst[i], carry) = dst[i].carrying_add(src[i], carry);
        i += 1;
    }

    while i < dst.len() {
        (dst[i], carry) = dst[i].overflowing_add(carry);
        i += 1;
    }
    carry
}

/// Compute `dst = a - b`, wrapping on underflow, and return the borrow.
///
/// The borrow is [`Limb::ZERO`] when `a >= b` and [`Limb::MAX`] otherwise.
///
/// # Panics
/// If the three slices do not share one length.
#[inline]
#[track_caller]
pub const fn sub(dst: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
    assert!(
        dst.len() == a.len() && a.len() == b.len(),
        "length mismatch in sub"
    );

    let mut borrow = Limb::ZERO;
    let mut i = 0;
    while i < dst.len() {
        (dst[i], borrow) = a[i].borrowing_sub(b[i], borrow);
        i += 1;
    }
    borrow
}

/// Compute `dst -= rhs` in place, wrapping on underflow, and return the borrow.
///
/// # Panics
/// If `dst` and `rhs` have different lengths.
#[inline]
#[track_caller]
pub const fn sub_assign(dst: &mut [Limb], rhs: &[Limb]) -> Limb {
    assert!(dst.len() == rhs.len(), "length mismatch in sub_assign");

    let mut borrow = Limb::ZERO;
    let mut i = 0;
    while i < dst.len() {
        (dst[i], borrow) = dst[i].borrowing_sub(rhs[i], borrow);
        i += 1;
    }
    borrow
}
