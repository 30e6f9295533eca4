use super::*;
use crate::underlying::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(Int::ZERO);

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self(Int::MIN);

  /// Largest representable value, equal to `-MIN`.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self(Int::MAX);

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self(const_as(-(1 << (N - 1)) + 1));

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self(Int::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self(const_as(-1));

  /// The minimum exponent; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_EXP: i32 = -((N as i32 - 2) << ES);

  /// The maximum exponent; [`Self::MAX`] = 2 <sup>[`Self::MAX_EXP`]</sup>.
  pub const MAX_EXP: i32 = (N as i32 - 2) << ES;

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self(const_as(1 << (N - 2)));

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self(const_as(-(1 << (N - 2))));

  /// Float inputs whose magnitude is at or below this value convert to [zero](Self::ZERO) instead
  /// of saturating to [`Self::MIN_POSITIVE`].
  ///
  /// This is `1e-6` for 8-bit posits and its square, `1e-12`, for 16-bit posits. Without the
  /// `flush-to-zero` feature it is `0.0`, and only an exact zero converts to zero.
  pub const EPSILON: f64 =
    if cfg!(feature = "flush-to-zero") {
      if N == 8 { 1e-6 } else { 1e-6 * 1e-6 }
    } else {
      0.0
    };

  /// The maximum number of Newton-Raphson rounds performed by [`Self::sqrt`].
  pub const SQRT_ITERATIONS: u32 = if N == 8 { 9 } else { 5 };
}
