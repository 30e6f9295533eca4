//! Hooks for observing the iterative kernels.
//!
//! The crate is `no_std` and does no logging of its own. Functions with a `_traced` suffix take
//! a `&mut impl Trace` instead, and report their intermediate state to it; the plain versions pass
//! [`NoTrace`], which compiles away.
//!
//! ```
//! use small_posit::{p16, RoundFrom, trace::Trace};
//!
//! #[derive(Default)]
//! struct Steps(u32);
//!
//! impl Trace for Steps {
//!   fn sqrt_step(&mut self, _iteration: u32, _guess: u32) { self.0 += 1 }
//! }
//!
//! let mut steps = Steps::default();
//! let root = p16::round_from(2.0).sqrt_traced(&mut steps);
//! assert_eq!(root, p16::round_from(2.0).sqrt());
//! assert!(steps.0 <= p16::SQRT_ITERATIONS);
//! ```

/// An observer of intermediate results. Every method does nothing by default.
pub trait Trace {
  /// Called after each Newton-Raphson round of [`sqrt`](crate::Posit::sqrt_traced), with the
  /// 0-based round number and the new guess for the fraction of the root (a fixed-point number
  /// with `2(N-1)` fractional bits).
  #[inline]
  fn sqrt_step(&mut self, iteration: u32, guess: u32) {
    let _ = (iteration, guess);
  }

  /// Called once the argument of a trigonometric function has been reduced, with the number of
  /// ±2π folds that were needed after the first reduction and the raw bits of the reduced angle.
  #[inline]
  fn angle_reduced(&mut self, folds: u32, reduced: i16) {
    let _ = (folds, reduced);
  }
}

/// A [`Trace`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {}
