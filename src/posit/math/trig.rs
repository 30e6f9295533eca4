//! Trigonometric functions for 16-bit posits, by low-degree polynomial and rational
//! approximations evaluated in posit arithmetic. They are fast and small, but only accurate to
//! about two decimal places.

use super::*;
use crate::trace::{Trace, NoTrace};

/// Arguments that need more than this many ±2π folds after the first reduction are rejected.
const MAX_FOLDS: u32 = 4;

impl Posit<16, 2, i16> {
  /// π, truncated (3.140625).
  pub const PI: Self = Self::from_bits(0x4c90);

  /// π/2, truncated (1.5703125).
  pub const HALF_PI: Self = Self::from_bits(0x4490);

  /// 2π, truncated (6.28125).
  pub const TWO_PI: Self = Self::from_bits(0x5490);

  const HALF: Self = Self::from_bits(0x3800);
  const THREE: Self = Self::from_bits(0x4c00);
  const TWELVE: Self = Self::from_bits(0x5c00);

  /// The coefficient in `atan(x) ≈ x / (1 + K x²)` (0.28125).
  const ATAN_K: Self = Self::from_bits(0x3100);

  /// Reduce an angle into [-π, π], by subtracting the whole number of turns `trunc(x ÷ 2π)` and
  /// then folding by ±2π a few more times if needed (the first step is itself inexact).
  ///
  /// If the angle is still out of range after that, it's too large for its multiple of 2π to be
  /// known with 16-bit precision, and the result is NaR. Every argument of magnitude up to 2^13 can
  /// be reduced; most larger ones, starting at 8224 and including 2^14, cannot.
  ///
  /// ```
  /// # use small_posit::{p16, RoundFrom, trace::NoTrace};
  /// let x = p16::round_from(10.0).reduce_angle_traced(&mut NoTrace);
  /// assert!(-p16::PI <= x && x <= p16::PI);
  /// assert_eq!(p16::round_from(16384.0).reduce_angle_traced(&mut NoTrace), p16::NAR);
  /// ```
  pub fn reduce_angle_traced(self, tracer: &mut impl Trace) -> Self {
    if self == Self::NAR {
      return Self::NAR
    }
    let turns = (self / Self::TWO_PI).trunc();
    let mut x = self - turns * Self::TWO_PI;
    for folds in 0 ..= MAX_FOLDS {
      if x > Self::PI {
        x -= Self::TWO_PI
      } else if x < -Self::PI {
        x += Self::TWO_PI
      } else {
        tracer.angle_reduced(folds, x.to_bits());
        return x
      }
    }
    Self::NAR
  }

  /// Sine, approximated by `(x/3)(3 - x²/2)` after reflecting `x` into [-π/2, π/2].
  ///
  /// The absolute error is under 0.08 on [-4, 4]. See [`Self::reduce_angle_traced`] for which
  /// arguments give NaR.
  ///
  /// ```
  /// # use small_posit::{p16, RoundFrom};
  /// assert_eq!(p16::ZERO.sin(), p16::ZERO);
  /// assert_eq!(f64::round_from(p16::ONE.sin()), 0.8330078125);  // sin(1) = 0.84147…
  /// ```
  pub fn sin(self) -> Self {
    let x = self.reduce_angle_traced(&mut NoTrace);
    if x == Self::NAR {
      return x
    }
    let x =
      if x > Self::HALF_PI { Self::PI - x }
      else if x < -Self::HALF_PI { -Self::PI - x }
      else { x };
    let x2 = x * x;
    (x / Self::THREE) * (Self::THREE - x2 * Self::HALF)
  }

  /// Cosine, approximated by `1 - (x²/2)(1 - x²/12)` after reflecting `|x|` into [0, π/2].
  ///
  /// The absolute error is under 0.025 on [-4, 4]. See [`Self::reduce_angle_traced`] for which
  /// arguments give NaR.
  ///
  /// ```
  /// # use small_posit::p16;
  /// assert_eq!(p16::ZERO.cos(), p16::ONE);
  /// ```
  pub fn cos(self) -> Self {
    let x = self.reduce_angle_traced(&mut NoTrace);
    if x == Self::NAR {
      return x
    }
    let x = x.abs();
    let reflected = x > Self::HALF_PI;
    let x = if reflected { Self::PI - x } else { x };
    let x2 = x * x;
    let result = Self::ONE - (x2 * Self::HALF) * (Self::ONE - x2 / Self::TWELVE);
    if reflected { -result } else { result }
  }

  /// Tangent, as [`sin`](Self::sin) ÷ [`cos`](Self::cos).
  ///
  /// The absolute error is under 0.025 on [-1, 1].
  pub fn tan(self) -> Self {
    self.sin() / self.cos()
  }

  /// Arctangent, approximated by `x / (1 + K x²)` on [-1, 1], and by `π/2 - atan(1/x)` outside
  /// it.
  ///
  /// The absolute error is under 0.006 everywhere.
  ///
  /// ```
  /// # use small_posit::p16;
  /// assert_eq!(p16::MAX.atan(), p16::HALF_PI);
  /// assert_eq!(p16::MIN.atan(), -p16::HALF_PI);
  /// ```
  pub fn atan(self) -> Self {
    if self == Self::NAR {
      return self
    }
    let x = self.abs();
    let inverted = x > Self::ONE;
    let y = if inverted { Self::ONE / x } else { x };
    let result = y / (Self::ONE + Self::ATAN_K * (y * y));
    let result = if inverted { Self::HALF_PI - result } else { result };
    if self < Self::ZERO { -result } else { result }
  }
}
