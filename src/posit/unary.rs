use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Returns the posit value of the lexicographic successor of `self`'s representation.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input: they simply wrap around.
  ///
  /// ```
  /// # use small_posit::p8;
  /// assert_eq!(p8::ZERO.next(), p8::MIN_POSITIVE);
  /// assert_eq!(p8::MAX.next(), p8::NAR);
  /// ```
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(Int::ONE))
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation.
  ///
  /// See [`Self::next`].
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(Int::ONE))
  }

  /// Return the absolute value of `self`. Exact; NaR stays NaR.
  #[inline]
  pub fn abs(self) -> Self {
    Self::from_bits(self.0.wrapping_abs())
  }

  /// Return the sign of `self`: [`Self::ONE`], [`Self::MINUS_ONE`], or [`Self::ZERO`]. NaR gives
  /// NaR.
  pub fn signum(self) -> Self {
    if self.is_special() {
      self
    } else if self.0.is_positive() {
      Self::ONE
    } else {
      Self::MINUS_ONE
    }
  }

  /// Round `self` toward zero to an integer value.
  ///
  /// ```
  /// # use small_posit::{p16, RoundFrom};
  /// assert_eq!(p16::round_from(2.75).trunc(), p16::round_from(2.0));
  /// assert_eq!(p16::round_from(-2.75).trunc(), p16::round_from(-2.0));
  /// assert_eq!(p16::round_from(0.75).trunc(), p16::ZERO);
  /// ```
  pub fn trunc(self) -> Self {
    let TryDecoded::Regular(x) = self.try_decode() else { return self };
    // `mant` has `FRAC_WIDTH` fractional bits; an exponent of `exp` turns `exp` of them into
    // integer bits.
    if x.exp < 0 {
      Self::ZERO
    } else if x.exp >= Self::FRAC_WIDTH as i32 {
      self
    } else {
      let mant: u32 = x.mant.into();
      let fractional = (Self::HIDDEN >> x.exp) - 1;
      let mant = Int::Unsigned::of_u32(mant & !fractional);
      Decoded { mant, ..x }.encode_regular()
    }
  }
}

impl<const N: u32,const ES: u32,Int: crate::Int>
core::ops::Neg for Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Exact; 0 and NaR are their own negation.
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32,const ES: u32,Int: crate::Int>
core::ops::Neg for &Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
