#![cfg_attr(not(test), no_std)]
//! This crate provides a small, self-contained software implementation of 8-bit and 16-bit
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf), for targets without an FPU.
//!
//! # Introduction
//!
//! Posits are an alternative floating point format proposed by John Gustafson in 2017. A posit
//! packs a sign, a variable-length *regime*, up to `ES` exponent bits, and a fraction into a
//! single machine int; there is a single zero and a single exceptional value, NaR ("not a real"),
//! and no infinities, subnormals, or negative zero.
//!
//! The following references are useful if you are not yet familiar with posits:
//!
//!   - [Posit standard](https://posithub.org/docs/posit_standard-2.pdf) (2022)
//!   - [Original extended paper](https://posithub.org/docs/Posits4.pdf) (2017)
//!
//! This crate deliberately departs from the standard in one respect: every result is
//! **truncated** (rounded toward zero) instead of rounded to nearest. Results still saturate:
//! overflow gives [`MAX`](Posit::MAX), underflow gives [`MIN_POSITIVE`](Posit::MIN_POSITIVE),
//! and a real result is never NaR. Correctness is ensured via extensive testing against an
//! exact rational oracle.
//!
//! # Usage
//!
//! ```
//! // Use the predefined posit types, or spell out the parameters.
//! # use small_posit::Posit;
//! use small_posit::{p8, p8e1, p8e2, p16};
//! type MyPosit = Posit<16, 1, i16>;  // 16 bits, 1 exponent bit
//!
//! // Create posits from ints, IEEE floats, constants, or a raw bit representation.
//! # use small_posit::{RoundFrom, RoundInto};
//! let a = p16::round_from(2.71_f64);
//! let b = p16::round_from(42_i32);
//! let c = p16::from_bits(0x4c90);
//! let d = p16::MIN_POSITIVE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(p16::round_from(2.14_f32) + p16::ONE == 3.14_f32.round_into());
//! assert!(p16::MIN_POSITIVE < 1e-11_f32.round_into());
//! assert_eq!(p16::ONE / p16::ZERO, p16::NAR);
//!
//! // A few elementary functions.
//! assert_eq!(p16::round_from(4).sqrt(), p16::round_from(2));
//! assert_eq!(p16::PI.sin(), p16::ZERO);
//! assert!(p16::ONE.atan() < p16::HALF_PI);
//!
//! // Move between the 8- and 16-bit formats.
//! use small_posit::{widen, narrow};
//! assert_eq!(narrow::<2>(widen(p8e2::round_from(0.3))), p8e2::round_from(0.3));
//!
//! // Convert posits back to ints, IEEE floats, or a raw bit representation.
//! assert_eq!(i32::round_from(b), 42);
//! assert_eq!(c.to_f64(), 3.140625);
//! assert_eq!(p8::ONE.to_bits(), 0b01000000);
//! # let _ = (a, d, p8e1::ONE, MyPosit::ONE);
//! ```
//!
//! # Observability
//!
//! The crate is `no_std`, allocation-free, and has no logging of its own. The iterative kernels
//! can report their intermediate state through the [`trace::Trace`] hooks.
//!
//! # Performance
//!
//! Every operation decodes, computes in native `u32`/`i32` arithmetic, and re-encodes, without
//! any tables. This crate includes benchmarks; run them with `cargo bench -F bench`.

mod posit;
mod underlying;
pub mod trace;

pub use posit::{Posit, Decoded, TryDecoded};
pub use underlying::Int;

/// 8-bit posit with no exponent bits.
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 0, i8>;

/// 8-bit posit with a 1-bit exponent.
#[allow(non_camel_case_types)]
pub type p8e1 = Posit<8, 1, i8>;

/// Standard-defined 8-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p8e2 = Posit<8, 2, i8>;

/// Standard-defined 16-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 2, i16>;

pub use posit::convert::{RoundFrom, RoundInto};
pub use posit::convert::{widen, narrow, narrow_round};

/// Number of proptest cases per test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x2000} else {0x4_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
