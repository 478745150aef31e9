//! Fixed-width multiplication and reduction kernels for 256-bit operands.
//!
//! # About
//! This library multiplies 256-bit unsigned integers into their exact 512-bit product using one
//! level of Karatsuba over 128-bit halves, and reduces wide values modulo the Mersenne-form
//! moduli `2^256 - 1` and `2^512 - 1` by end-around carry folding. It is the kind of kernel that
//! sits under lattice-based and other public-key schemes, and is written to be measured: a
//! cycle-count harness and a `num-bigint` backed correctness oracle ship alongside it.
//!
//! All integers are little-endian arrays of 32-bit [`Limb`]s, wrapped in [`Uint`].
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly. Every buffer lives on the stack.
//! - Constant-time arithmetic: no branches or memory accesses depend on operand values, and
//!   canonicalization of residues uses traits from the [`subtle`] crate.
//! - Pluggable 128-bit multiplier: the two half products of [`mul_karatsuba_512`] go through the
//!   [`Mul128`] trait, with [`Schoolbook`] and [`ProductScanning`] backends provided.
//!
//! # Usage
//! ```
//! use kara512::{U256, U512, Schoolbook, mul_karatsuba_512, modular::reduce_mod_2p256_minus_1};
//!
//! let a = U256::from_u64(0xFFFF_FFFF_FFFF_FFFF);
//! let b = U256::from_u64(2);
//!
//! let mut product: U512 = mul_karatsuba_512::<Schoolbook>(&a, &b);
//! let (lo, hi) = product.split();
//! assert_eq!(lo, U256::from_words([0xFFFF_FFFE, 0xFFFF_FFFF, 1, 0, 0, 0, 0, 0]));
//! assert_eq!(hi, U256::ZERO);
//!
//! // Already below the modulus, so reduction leaves it alone.
//! reduce_mod_2p256_minus_1(&mut product);
//! assert_eq!(product.split(), (lo, hi));
//! ```
//!
//! # Features
//! - `rand`: random [`Uint`] generation via [`Random`].
//! - `oracle`: the [`oracle`] module, comparing results against `num-bigint`.
//! - `std`: [`bench::InstantCounter`].
//! - `bin`: the `mulcheck` and `mulbench` command-line tools.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bench;
pub mod modular;
#[cfg(feature = "oracle")]
pub mod oracle;

mod limb;
mod primitives;
mod traits;
mod uint;

pub use crate::{limb::Limb, traits::*, uint::*};
pub use subtle;

#[cfg(feature = "zeroize")]
pub use zeroize;

/// Inner integer type of a [`Limb`].
pub type Word = u32;

/// Unsigned integer twice the width of a [`Word`], holding a full limb product.
pub type WideWord = u64;
