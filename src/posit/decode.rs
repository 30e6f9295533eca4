use super::*;

/// The result of decoding any posit: either one of the two special values, or a regular
/// [`Decoded`] number.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum TryDecoded<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> {
  Zero,
  NaR,
  Regular(Decoded<N, ES, Int>),
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Decompose a posit into its sign, exponent, and mantissa. [Zero](Self::ZERO) and
  /// [NaR](Self::NAR) have no such decomposition, and are returned as [`TryDecoded::Zero`] and
  /// [`TryDecoded::NaR`].
  ///
  /// # Example
  ///
  /// ```
  /// # use small_posit::{p16, TryDecoded};
  /// let TryDecoded::Regular(x) = p16::from_bits(0x4800).try_decode() else { unreachable!() };
  /// assert_eq!((x.sign, x.exp, x.mant), (false, 1, 0x8000));
  /// assert_eq!(p16::NAR.try_decode(), TryDecoded::NaR);
  /// ```
  pub fn try_decode(self) -> TryDecoded<N, ES, Int> {
    if self == Self::ZERO {
      TryDecoded::Zero
    } else if self == Self::NAR {
      TryDecoded::NaR
    } else {
      TryDecoded::Regular(self.decode_regular())
    }
  }

  /// Decode a posit **which is not 0 or NaR** into its constituent sign, `exp`onent, and
  /// `mant`issa.
  ///
  /// `self` cannot be 0 or NaR; this is checked in debug builds only.
  pub(crate) fn decode_regular(self) -> Decoded<N, ES, Int> {
    debug_assert!(
      !self.is_special(),
      "Precondition violated: {self:?} cannot be 0 or NaR",
    );

    // Posits are interpreted in two's complement: the fields are read from the absolute value of
    // the bit pattern, and the sign is kept separately.
    let sign = !self.0.is_positive();
    let abs = self.0.magnitude();

    // Work in a `u32` where the bit right after the sign bit (the first regime bit) sits at bit
    // 31. Every field is then read by looking at the leftmost bits and shifting them out. Bits
    // shifted in from the right are 0s, which is exactly what we need when a field is partially
    // or totally missing at the end of the posit.
    let x = abs << (u32::BITS - Self::BITS + 1);

    // The regime is a run of 1s terminated by a 0, or a run of 0s terminated by a 1. In the
    // former case the number is ≥ 1 and the run may also go all the way to the end of the posit
    // (the "saturated" regime), in which case the 0 that `!x` shifts in from the right terminates
    // the count. In the latter case the terminating 1 is always present, because `self` is not 0.
    //
    // The regime is
    //
    //   n-1, if the regime bits are a run of n 1s
    //   -n,  if the regime bits are a run of n 0s
    //
    // Example (N = 8):
    //   abs        = 0b0_1110_010
    //   x          = 0b1110_010_0000…
    //   run        = 3
    //   regime     = 2
    let large = x >> (u32::BITS - 1) == 1;
    let run = if large { (!x).leading_zeros() } else { x.leading_zeros() };
    debug_assert!(run <= Self::BITS - 1);
    let regime = if large { run as i32 - 1 } else { -(run as i32) };

    // Shift out the regime bits and the terminating bit. After this, the leftmost `ES` bits are
    // the exponent, so we just shift those down to the rightmost `ES` bits. Each regime bit is
    // worth `2^ES` in the power-of-two exponent, and the exponent bits are the lower `ES` bits of
    // it.
    let y = x.checked_shl(run + 1).unwrap_or(0);
    let exponent = if const { Self::ES != 0 } { y >> (u32::BITS - Self::ES) } else { 0 };
    let exp = (regime << Self::ES) + exponent as i32;

    // The rest of the bits are the fraction. Shift out the exponent bits, then move the fraction
    // down so that it sits right below the hidden bit.
    let fraction = (y << Self::ES) >> (u32::BITS - Self::FRAC_WIDTH);
    let mant = Int::Unsigned::of_u32(Self::HIDDEN | fraction);

    Decoded { sign, exp, mant }
  }
}
