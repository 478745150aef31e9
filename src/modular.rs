//! Reduction modulo Mersenne-form moduli `2^k - 1`.
//!
//! Since `2^k ≡ 1 (mod 2^k - 1)`, a value split into `k`-bit halves `lo + hi * 2^k` is congruent
//! to `lo + hi`, and a carry out of bit `k` re-enters at bit 0 ("end-around carry"). The modulus
//! itself is never materialized.

mod mersenne;

pub use self::mersenne::{reduce_mod_2p256_minus_1, reduce_mod_2p512_minus_1};
