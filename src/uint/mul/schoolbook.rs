use crate::Limb;

/// Schoolbook multiplication a.k.a. long multiplication, i.e. the traditional method taught in
/// schools.
///
/// Writes the full `lhs.len() + rhs.len()` limb product of `lhs` and `rhs` into `out`. Each row
/// multiplies one limb of `lhs` against every limb of `rhs`, accumulating into `out` at the row's
/// offset with 64-bit intermediates; the row's final carry lands in the limb just above it,
/// which no earlier row has touched.
///
/// # Panics
/// If `out.len() != lhs.len() + rhs.len()`.
#[inline(always)]
pub const fn mul_wide(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) {
    assert!(
        lhs.len() + rhs.len() == out.len(),
        "schoolbook multiplication length mismatch"
    );

    let mut k = 0;
    while k < out.len() {
        out[k] = Limb::ZERO;
        k += 1;
    }

    let mut i = 0;
    while i < lhs.len() {
        let mut carry = Limb::ZERO;
        let xi = lhs[i];
        let mut j = 0;

        while j < rhs.len() {
            (out[i + j], carry) = xi.carrying_mul_add(rhs[j], out[i + j], carry);
            j += 1;
        }

        out[i + j] = carry;
        i += 1;
    }
}
