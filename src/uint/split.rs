//! Splitting wide integers into halves and concatenating halves back together.

use crate::{Limb, Uint};

/// Split this number in half, returning its low and high components respectively.
#[inline]
pub(crate) const fn split_mixed<const L: usize, const H: usize, const O: usize>(
    n: &Uint<O>,
) -> (Uint<L>, Uint<H>) {
    let top = L + H;
    let top = if top < O { top } else { O };
    let mut lo = [Limb::ZERO; L];
    let mut hi = [Limb::ZERO; H];
    let mut i = 0;

    while i < top {
        if i < L {
            lo[i] = n.limbs[i];
        } else {
            hi[i - L] = n.limbs[i];
        }
        i += 1;
    }

    (Uint { limbs: lo }, Uint { limbs: hi })
}

/// Concatenate `lo` and `hi`, with `lo` occupying the least significant limbs.
#[inline]
pub(crate) const fn concat_mixed<const L: usize, const H: usize, const O: usize>(
    lo: &Uint<L>,
    hi: &Uint<H>,
) -> Uint<O> {
    let top = L + H;
    let top = if top < O { top } else { O };
    let mut limbs = [Limb::ZERO; O];
    let mut i = 0;

    while i < top {
        if i < L {
            limbs[i] = lo.limbs[i];
        } else {
            limbs[i] = hi.limbs[i - L];
        }
        i += 1;
    }

    Uint { limbs }
}

macro_rules! impl_split {
    ($(($wide:ty, $half:ty)),+) => {
        $(
            impl $wide {
                /// Split this number in half, returning its low and high components
                /// respectively.
                #[inline]
                pub const fn split(&self) -> ($half, $half) {
                    split::split_mixed(self)
                }
            }

            impl $half {
                /// Concatenate `self` (least significant half) with `hi` (most significant
                /// half) into a number twice as wide.
                #[inline]
                pub const fn concat(&self, hi: &$half) -> $wide {
                    split::concat_mixed(self, hi)
                }
            }
        )+
    };
}
