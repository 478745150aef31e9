use crate::Limb;

/// Product-scanning ("Comba") multiplication.
///
/// Computes the same `2n` limb product as [`schoolbook::mul_wide`][super::schoolbook::mul_wide],
/// but column by column: every partial product contributing to output limb `k` is summed into a
/// three-limb accumulator `(r0, r1, r2)` before `r0` is stored, so each output limb is written
/// exactly once and no row carries ripple through memory.
///
/// # Panics
/// If `lhs` and `rhs` differ in length, are empty, or `out` is not twice as long.
#[inline(always)]
pub const fn mul_wide(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) {
    let n = lhs.len();
    assert!(
        n > 0 && rhs.len() == n && out.len() == 2 * n,
        "product scanning length mismatch"
    );

    let mut r0 = Limb::ZERO;
    let mut r1 = Limb::ZERO;
    let mut r2 = Limb::ZERO;
    let mut k = 0;

    while k < 2 * n - 1 {
        let mut i = if k < n { 0 } else { k + 1 - n };
        let end = if k < n { k } else { n - 1 };

        while i <= end {
            let (lo, hi) = lhs[i].widening_mul(rhs[k - i]);
            let (sum, c0) = r0.overflowing_add(lo);
            r0 = sum;
            let (sum, c1) = r1.carrying_add(hi, c0);
            r1 = sum;
            r2 = r2.wrapping_add(c1);
            i += 1;
        }

        out[k] = r0;
        r0 = r1;
        r1 = r2;
        r2 = Limb::ZERO;
        k += 1;
    }

    out[2 * n - 1] = r0;
}
