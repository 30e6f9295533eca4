use super::*;

/// Compute `floor(num × 2^bits ÷ den)`, the first `bits` binary digits of the fraction
/// `num ÷ den`, by restoring long division.
///
/// `num` must be less than `den`, and `bits` at most 31; this is checked in debug builds only.
pub(crate) fn frac_div(num: u32, den: u32, bits: u32) -> u32 {
  debug_assert!(
    num < den,
    "Precondition violated: {num} ÷ {den} is not a proper fraction",
  );
  debug_assert!(bits < u32::BITS);
  // Long division in binary: at each step, bring down a 0 (shift the remainder left), and if the
  // divisor fits in the remainder, subtract it and emit a 1. Since `num < den`, the remainder is
  // always less than `den` at the start of a step, so twice it fits in a `u64`.
  let den = u64::from(den);
  let mut rem = u64::from(num);
  let mut quot = 0;
  for i in (0 .. bits).rev() {
    if rem == 0 {
      break
    }
    rem <<= 1;
    if rem >= den {
      rem -= den;
      quot |= 1 << i;
    }
  }
  quot
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of dividing `x` by
  /// `y`, truncated.
  ///
  /// `x` and `y` must be normalised; this is checked in debug builds only.
  pub(crate) fn div_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> Decoded<N, ES, Int> {
    debug_assert!(x.is_normalised() && y.is_normalised());

    // Let's use ÷ to denote true mathematical division. Dividing two numbers in the form
    // `mant × 2^exp`, we have
    //
    //   (x.mant / 2^FRAC_WIDTH × 2^x.exp) ÷ (y.mant / 2^FRAC_WIDTH × 2^y.exp)
    //   = (x.mant ÷ y.mant) × 2^(x.exp - y.exp)
    //
    // Both mantissas are in [1, 2), so their quotient is in (1/2, 2). There are two cases:
    //
    //   - `x.mant ≥ y.mant`: the quotient is in [1, 2), and it is `1 + (x.mant - y.mant) ÷ y.mant`.
    //     The hidden bit is the 1, and the fraction bits are the first `FRAC_WIDTH` binary digits
    //     of the proper fraction `(x.mant - y.mant) ÷ y.mant`.
    //   - `x.mant < y.mant`: the quotient is in (1/2, 1), so twice it is in (1, 2). Its binary
    //     digits, starting from the hidden bit, are the first `FRAC_WIDTH + 1` binary digits of the
    //     proper fraction `x.mant ÷ y.mant`; and we subtract 1 from the exponent to compensate.
    let x_mant: u32 = x.mant.into();
    let y_mant: u32 = y.mant.into();
    let exp = x.exp - y.exp;
    let (mant, exp) =
      if x_mant >= y_mant {
        (Self::HIDDEN | frac_div(x_mant - y_mant, y_mant, Self::FRAC_WIDTH), exp)
      } else {
        (frac_div(x_mant, y_mant, Self::FRAC_WIDTH + 1), exp - 1)
      };

    Decoded {
      sign: x.sign != y.sign,
      exp,
      mant: Int::Unsigned::of_u32(mant),
    }
  }

  pub(crate) fn div(self, other: Self) -> Self {
    if self == Self::NAR || other == Self::NAR || other == Self::ZERO {
      Self::NAR
    } else if self == Self::ZERO {
      Self::ZERO
    } else if other == Self::ONE {
      self
    } else {
      Self::div_kernel(self.decode_regular(), other.decode_regular()).encode_regular()
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
