//! Random number generator support

use super::Uint;
use crate::{Limb, Random};
use rand_core::RngCore;

impl<const LIMBS: usize> Random for Uint<LIMBS> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::random(rng);
        }

        limbs.into()
    }
}
