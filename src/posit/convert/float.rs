use super::*;

/// Implement the conversions between posits and one IEEE 754 binary float type, whose raw bits
/// are of type `$bits`.
macro_rules! make_impl {
  ($float:ty, $bits:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$float> for Posit<N, ES, Int> {
      #[doc = concat!("Convert an `", stringify!($float), "` into a `Posit`, truncating:")]
      ///
      /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
      /// - If the value is zero, or its magnitude is at or below [`Posit::EPSILON`], it converts
      ///   to [zero](Posit::ZERO).
      /// - Otherwise, the float value is truncated toward zero and saturated (if necessary).
      fn round_from(value: $float) -> Self {
        // Explicit fraction bits, and exponent bias.
        const FRAC_BITS: u32 = <$float>::MANTISSA_DIGITS - 1;
        const BIAS: i32 = <$float>::MAX_EXP - 1;

        if !value.is_finite() {
          return Self::NAR
        }
        if value == 0.0 || f64::from(value).abs() <= Self::EPSILON {
          return Self::ZERO
        }

        let bits = value.to_bits();
        let sign = bits >> (<$bits>::BITS - 1) != 0;
        let biased = ((bits & !(1 << (<$bits>::BITS - 1))) >> FRAC_BITS) as i32;
        let fraction = bits & ((1 << FRAC_BITS) - 1);

        // Normals have a hidden bit. Subnormals don't, but have the exponent of the smallest normal;
        // move their leading 1 up to where the hidden bit would be.
        let (exp, significand) =
          if biased != 0 {
            (biased - BIAS, fraction | 1 << FRAC_BITS)
          } else {
            let shift = fraction.leading_zeros() - (<$bits>::BITS - 1 - FRAC_BITS);
            (1 - BIAS - shift as i32, fraction << shift)
          };

        // Keep the leftmost `N` bits of the significand, the rest is truncated.
        let mant = (significand >> (FRAC_BITS - Self::FRAC_WIDTH)) as u32;
        Decoded {
          sign,
          exp,
          mant: Int::Unsigned::of_u32(mant),
        }.encode_regular()
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $float {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($float), "`.")]
      ///
      /// This conversion is exact: every posit value is representable. [NaR](Posit::NAR) converts
      /// to NaN.
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        const FRAC_BITS: u32 = <$float>::MANTISSA_DIGITS - 1;
        const BIAS: i32 = <$float>::MAX_EXP - 1;

        match value.try_decode() {
          TryDecoded::Zero => 0.0,
          TryDecoded::NaR => <$float>::NAN,
          TryDecoded::Regular(x) => {
            let mant: u32 = x.mant.into();
            let fraction =
              <$bits>::from(mant & (Posit::<N, ES, Int>::HIDDEN - 1))
              << (FRAC_BITS - Posit::<N, ES, Int>::FRAC_WIDTH);
            let biased = (x.exp + BIAS) as $bits;
            let sign = <$bits>::from(x.sign) << (<$bits>::BITS - 1);
            <$float>::from_bits(sign | biased << FRAC_BITS | fraction)
          }
        }
      }
    }
  };
}

make_impl!{f32, u32}
make_impl!{f64, u64}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The value of `self` as an [`f32`], exactly. [NaR](Self::NAR) gives NaN.
  ///
  /// ```
  /// # use small_posit::*;
  /// assert_eq!(p8e1::from_bits(0b0_10_0_1000).to_f32(), 1.5);
  /// assert!(p8::NAR.to_f32().is_nan());
  /// ```
  pub fn to_f32(self) -> f32 {
    f32::round_from(self)
  }

  /// The value of `self` as an [`f64`], exactly. [NaR](Self::NAR) gives NaN.
  pub fn to_f64(self) -> f64 {
    f64::round_from(self)
  }
}
