//! Random number generator support

use super::Limb;
use crate::Random;
use rand_core::RngCore;

impl Random for Limb {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u32())
    }
}
