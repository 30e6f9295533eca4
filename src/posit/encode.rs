use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// Encode a [normalised](Decoded::is_normalised) `Decoded` into a posit, truncating any bits
  /// that don't fit.
  ///
  /// Exponents beyond the posit's dynamic range saturate: the result is never 0 or NaR, but
  /// [`Posit::MAX`]/[`Posit::MIN_POSITIVE`] (or their negatives).
  ///
  /// `self` must be normalised; this is checked in debug builds only.
  pub(crate) fn encode_regular(self) -> Posit<N, ES, Int> {
    debug_assert!(
      self.is_normalised(),
      "Precondition violated: {self:?} is not normalised",
    );
    // The regime and exponent fields of the posit are `exp`'s quotient and remainder by 2^ES
    // (using floor division, so that the exponent field is always non-negative).
    let regime = self.exp >> ES;
    let exponent = self.exp & ((1 << ES) - 1);

    // The number of bits after the sign bit.
    let avail = Posit::<N, ES, Int>::BITS - 1;

    // A regime of `r ≥ 0` is a run of `r+1` 1s terminated by a 0, a regime of `r < 0` is a run
    // of `-r` 0s terminated by a 1. If the run, not counting the terminating bit, already
    // takes up all of `avail`, there is no room for anything else and the result saturates.
    //
    //   regime_bits: the run and the terminating bit, right-aligned
    //   regime_len:  number of bits in `regime_bits`
    let (regime_bits, regime_len): (u64, u32) =
      if regime >= 0 {
        if regime >= avail as i32 - 1 { return Self::with_sign(self.sign, Posit::MAX) }
        let run = regime as u32 + 1;
        (((1 << run) - 1) << 1, run + 1)
      } else {
        if regime <= -(avail as i32) { return Self::with_sign(self.sign, Posit::MIN_POSITIVE) }
        let run = regime.unsigned_abs();
        (1, run + 1)
      };

    // Lay out the regime, exponent, and fraction bits (without the hidden bit) one after the
    // other in a wide enough integer, left to right. Then keep only the leftmost `avail` of them;
    // the rest are truncated.
    //
    // Example (N = 16, ES = 2, exp = 5, mant = 0b1_011000000000000):
    //   regime_bits  = 0b110 (regime 1)
    //   exponent     = 0b01
    //   body         = 0b110_01_011000000000000 (20 bits)
    //   result       = 0b0_110_01_0110000000 (top 15 bits of body)
    let frac_width = Posit::<N, ES, Int>::FRAC_WIDTH;
    let mant: u32 = self.mant.into();
    let fraction = mant & (Posit::<N, ES, Int>::HIDDEN - 1);
    let body =
      regime_bits << (ES + frac_width)
      | (exponent as u64) << frac_width
      | fraction as u64;
    let body_len = regime_len + ES + frac_width;
    debug_assert!(body_len > avail);
    let abs = (body >> (body_len - avail)) as u32;

    Self::with_sign(self.sign, Posit::from_bits(Int::of_unsigned(Int::Unsigned::of_u32(abs))))
  }

  /// Apply the sign to a nonnegative posit, by two's complement negation if `sign` is set.
  #[inline]
  fn with_sign(sign: bool, abs: Posit<N, ES, Int>) -> Posit<N, ES, Int> {
    if sign { -abs } else { abs }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Recompose a posit from a sign, a power-of-two exponent, and a mantissa with `N - 1`
  /// fractional bits, i.e. the posit closest to
  ///
  ///   `(-1)^sign × (mant / 2^(N-1)) × 2^exp`
  ///
  /// rounding toward zero. `mant` doesn't need to have its top bit set; it is normalised first.
  /// A `mant` of 0 gives [zero](Self::ZERO), and values beyond the dynamic range saturate to
  /// [`Self::MAX`] or [`Self::MIN_POSITIVE`] (or their negatives).
  ///
  /// # Example
  ///
  /// ```
  /// # use small_posit::p16;
  /// assert_eq!(p16::recompose(false, 1, 0x8000), p16::from_bits(0x4800));  // 2.0
  /// assert_eq!(p16::recompose(true, 0, 0x8000), p16::MINUS_ONE);
  /// assert_eq!(p16::recompose(false, 0, 0x0001), p16::recompose(false, -15, 0x8000));
  /// assert_eq!(p16::recompose(false, 1000, 0x8000), p16::MAX);
  /// ```
  pub fn recompose(sign: bool, exp: i32, mant: Int::Unsigned) -> Self {
    let mant: u32 = mant.into();
    if mant == 0 { return Self::ZERO }
    let shift = mant.leading_zeros() - (u32::BITS - Self::BITS);
    let mant = Int::Unsigned::of_u32(mant << shift);
    let exp = exp.saturating_sub(shift as i32);
    Decoded { sign, exp, mant }.encode_regular()
  }
}
