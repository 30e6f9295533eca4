use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of multiplying `x`
  /// and `y`, truncated.
  ///
  /// `x` and `y` must be normalised; this is checked in debug builds only.
  pub(crate) fn mul_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> Decoded<N, ES, Int> {
    debug_assert!(x.is_normalised() && y.is_normalised());

    // Multiplying two numbers in the form `mant × 2^exp` is much easier than adding them. We have
    //
    //   (x.mant / 2^FRAC_WIDTH × 2^x.exp) × (y.mant / 2^FRAC_WIDTH × 2^y.exp)
    //   = ((x.mant × y.mant) >> FRAC_WIDTH) / 2^FRAC_WIDTH × 2^(x.exp + y.exp)
    //
    // In other words: the resulting `exp` is just the sum of the `exp`s, and the `mant` is the
    // product of the `mant`s shifted right by `FRAC_WIDTH`, which truncates. Both mantissas are
    // less than 2^16, so the product fits in a `u32`.
    //
    // Both mantissas are in [1, 2), so their product is in [1, 4): it may need one more shift to
    // the right to be normalised again. For example: 1. × 1. = 1., but 1.5 × 1.5 = 2.25 = 1.125 ×
    // 2¹.
    let x_mant: u32 = x.mant.into();
    let y_mant: u32 = y.mant.into();
    let mant = (x_mant * y_mant) >> Self::FRAC_WIDTH;
    let exp = x.exp + y.exp;
    let (mant, exp) =
      if mant >= Self::HIDDEN << 1 { (mant >> 1, exp + 1) } else { (mant, exp) };

    Decoded {
      sign: x.sign != y.sign,
      exp,
      mant: Int::Unsigned::of_u32(mant),
    }
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    if self == Self::NAR || other == Self::NAR {
      Self::NAR
    } else if self == Self::ZERO || other == Self::ZERO {
      Self::ZERO
    } else if self == Self::ONE {
      other
    } else if other == Self::ONE {
      self
    } else {
      Self::mul_kernel(self.decode_regular(), other.decode_regular()).encode_regular()
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
