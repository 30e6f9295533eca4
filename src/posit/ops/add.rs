use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of adding `x` and
  /// `y`, or `None` if the sum is exactly zero.
  ///
  /// `x` and `y` must be normalised; this is checked in debug builds only.
  pub(crate) fn add_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> Option<Decoded<N, ES, Int>> {
    debug_assert!(x.is_normalised() && y.is_normalised());

    // First, align the mantissas: the one with the smaller exponent is shifted right by the
    // difference, so that both are fixed-point numbers with the same weight. Bits shifted out are
    // simply lost (truncated); a shift of 32 or more loses all of them.
    let (x, y) = if x.exp >= y.exp { (x, y) } else { (y, x) };
    let shift = x.exp.abs_diff(y.exp);
    let x_mant: u32 = x.mant.into();
    let y_mant: u32 = y.mant.into();
    let y_mant = y_mant.checked_shr(shift).unwrap_or(0);

    // Add them as signed numbers. Each mantissa is less than 2^N, so an `i32` is plenty.
    let signed = |sign: bool, mant: u32| if sign { -(mant as i32) } else { mant as i32 };
    let sum = signed(x.sign, x_mant) + signed(y.sign, y_mant);
    if sum == 0 {
      return None
    }
    let sign = sum < 0;
    let mant = sum.unsigned_abs();

    // Adding two values of the same sign: an overflow by 1 place *may* occur. For example
    //
    //     1.25 = 0b1_0100
    //   + 1.0  = 0b1_0000
    //   = 2.25 = 0b10_0100
    //
    // If this happens, we must shift the `mant` right by 1 (i.e. divide by 2), and add 1 to
    // exponent to compensate.
    //
    // Adding values of opposite signs: an underflow by n places *may* occur. For example
    //
    //     1.25 = 0b1_0100
    //   - 1.0  = 0b1_0000
    //   = 0.25 = 0b0_0100
    //
    // If this happens, we must shift the `mant` left by n until the hidden bit is set again, and
    // subtract n from the exponent.
    let (mant, exp) =
      if mant >= Self::HIDDEN << 1 {
        (mant >> 1, x.exp + 1)
      } else {
        let underflow = mant.leading_zeros() - (u32::BITS - Self::BITS);
        (mant << underflow, x.exp - underflow as i32)
      };

    Some(Decoded { sign, exp, mant: Int::Unsigned::of_u32(mant) })
  }

  pub(crate) fn add(self, other: Self) -> Self {
    if self == Self::NAR || other == Self::NAR {
      Self::NAR
    } else if self == Self::ZERO {
      other
    } else if other == Self::ZERO {
      self
    } else {
      match Self::add_kernel(self.decode_regular(), other.decode_regular()) {
        Some(result) => result.encode_regular(),
        None => Self::ZERO,
      }
    }
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
