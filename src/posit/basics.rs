use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The size of this Posit type in bits (i.e. parameter `N`).
  pub const BITS: u32 = {
    assert!(
      N == 8 || N == 16,
      "Only 8-bit and 16-bit posits are supported",
    );
    assert!(
      N == Int::BITS,
      "The underlying Int machine type must be exactly N bits wide (i8 for N = 8, i16 for N = 16)",
    );
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    assert!(
      ES <= 2,
      "At most 2 exponent bits are supported",
    );
    ES
  };

  /// The number of fraction bits that follow the hidden bit in [`Decoded::mant`].
  pub(crate) const FRAC_WIDTH: u32 = Self::BITS - 1;

  /// The hidden bit of [`Decoded::mant`], as a `u32`.
  pub(crate) const HIDDEN: u32 = 1 << Self::FRAC_WIDTH;

  /// Construct a posit from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: Int) -> Self {
    Self(bits)
  }

  /// Return the underlying bit representation of `self` as a machine int.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// Construct a posit from its raw bit representation, given as an unsigned int (e.g. `0x8000`
  /// for the 16-bit NaR).
  #[inline]
  pub fn from_bits_unsigned(bits: Int::Unsigned) -> Self {
    Self::from_bits(Int::of_unsigned(bits))
  }

  /// Return the underlying bit representation of `self` as an unsigned machine int.
  #[inline]
  pub fn to_bits_unsigned(self) -> Int::Unsigned {
    self.0.as_unsigned()
  }

  /// Checks whether `self` is [NaR](Self::NAR).
  #[inline]
  pub fn is_nar(self) -> bool {
    self == Self::NAR
  }

  /// Checks whether `self` is [zero](Self::ZERO).
  #[inline]
  pub fn is_zero(self) -> bool {
    self == Self::ZERO
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self == Self::ZERO || self == Self::NAR`, but faster.
  #[inline]
  pub(crate) fn is_special(&self) -> bool {
    self.0.wrapping_add(self.0) == Int::ZERO
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// As [`Posit::BITS`].
  pub const BITS: u32 = Posit::<N, ES, Int>::BITS;

  /// As [`Posit::ES`].
  pub const ES: u32 = Posit::<N, ES, Int>::ES;

  /// Checks whether `self` is "normalised", i.e. whether the hidden bit (the top bit of
  /// [`Decoded::mant`]) is set.
  pub fn is_normalised(self) -> bool {
    let mant: u32 = self.mant.into();
    mant & Posit::<N, ES, Int>::HIDDEN != 0
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use small_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<32, 2, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_32() {}

  /// ```compile_fail
  /// use small_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<10, 2, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_10() {}

  /// ```compile_fail
  /// use small_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 2, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_width_mismatch() {}

  /// ```compile_fail
  /// use small_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 3, i8>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_8_many() {}

  /// ```compile_fail
  /// use small_posit::Posit;
  /// pub fn foo() -> u32 { Posit::<16, 4, i16>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_16_many() {}
}
