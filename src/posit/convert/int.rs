use super::*;

macro_rules! make_impl {
  ($int:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$int> for Posit<N, ES, Int> {
      #[doc = concat!("Convert an `", stringify!($int), "` into a `Posit`, truncating:")]
      ///
      #[doc = concat!("  - If the value is [`", stringify!($int), "::MIN`] (i.e. the value where the most significant bit is 1 and the rest are 0), it converts to [NaR](Posit::NAR).")]
      ///   - Otherwise, the integer value is truncated toward zero and saturated (if necessary).
      fn round_from(value: $int) -> Self {
        // Handle 0 and MIN. MIN (i.e. bit pattern 0b1000…) is converted to NaR, and NaR is
        // converted to MIN.
        if value == 0 { return Posit::ZERO }
        if value == <$int>::MIN { return Posit::NAR }

        // Shift the magnitude so that its leading 1 is the msb of a `u64`: its exponent is the
        // number of places it was shifted by, subtracted from 63. Keep the leftmost `N` bits.
        //
        // Example (N = 8):
        //
        //   value: 0b00010011 (= 19)
        //    mant: 0b10011000
        //     exp: +4
        let abs = value.unsigned_abs() as u64;
        let underflow = abs.leading_zeros();
        let mant = (abs << underflow >> (u64::BITS - Self::BITS)) as u32;
        Decoded {
          sign: value < 0,
          exp: (u64::BITS - 1 - underflow) as i32,
          mant: Int::Unsigned::of_u32(mant),
        }.encode_regular()
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $int {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($int), "`, truncating:")]
      ///
      #[doc = concat!("  - If the value is [NaR](Posit::NAR), it converts to [`", stringify!($int), "::MIN`].")]
      ///   - Otherwise, the posit value is truncated toward zero. Values too large in magnitude
      #[doc = concat!("     saturate to [`", stringify!($int), "::MAX`] or its negation.")]
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        let x = match value.try_decode() {
          TryDecoded::Zero => return 0,
          TryDecoded::NaR => return <$int>::MIN,
          TryDecoded::Regular(x) => x,
        };
        if x.exp < 0 {
          return 0
        }
        // `|value| = mant × 2^(exp - FRAC_WIDTH)`, and `exp` is at most `MAX_EXP`, so the
        // shifted mantissa fits in a `u128` with room to spare.
        let mant: u32 = x.mant.into();
        let abs = (u128::from(mant) << x.exp) >> Posit::<N, ES, Int>::FRAC_WIDTH;
        let abs = abs.min(<$int>::MAX as u128) as $int;
        if x.sign { -abs } else { abs }
      }
    }
  }
}

make_impl!{i8}
make_impl!{i16}
make_impl!{i32}
make_impl!{i64}
