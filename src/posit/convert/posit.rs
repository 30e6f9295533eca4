use super::*;

/// Convert an 8-bit posit with any `ES` into a [`p16`](crate::p16). This is exact: every 8-bit
/// posit is also a 16-bit posit.
///
/// The same conversion is available as a [`From`] impl.
///
/// # Examples
///
/// ```
/// # use small_posit::*;
/// assert_eq!(widen(p8e2::from_bits(0x4c)), p16::from_bits(0x4c00));  // 3
/// assert_eq!(widen(p8::from_bits(0x68)), p16::from_bits(0x4c00));  // 3
/// assert_eq!(p16::from(p8e1::NAR), p16::NAR);
/// ```
pub fn widen<const ES: u32>(x: Posit<8, ES, i8>) -> Posit<16, 2, i16> {
  // Same `ES`: just pad with zeroes on the right.
  if const { ES == 2 } {
    return Posit::from_bits(i16::from(x.to_bits()) << 8)
  }
  match x.try_decode() {
    TryDecoded::Zero => Posit::ZERO,
    TryDecoded::NaR => Posit::NAR,
    TryDecoded::Regular(x) => Decoded {
      sign: x.sign,
      exp: x.exp,
      mant: u16::from(x.mant) << 8,
    }.encode_regular(),
  }
}

/// Convert a [`p16`](crate::p16) into an 8-bit posit with any `ES`, truncating toward zero and
/// saturating.
///
/// Truncation acts on the magnitude, so [`MIN`](Posit::MIN) becomes the 8-bit `MIN`, and no
/// real value becomes NaR. The same conversion is available as a [`RoundFrom`] impl. See
/// [`narrow_round`] to round to nearest instead.
///
/// # Examples
///
/// ```
/// # use small_posit::*;
/// assert_eq!(narrow::<2>(p16::from_bits(0x4cff)), p8e2::from_bits(0x4c));
/// assert_eq!(narrow::<2>(p16::MIN), p8e2::MIN);
/// assert_eq!(narrow::<0>(p16::round_from(3.0)), p8::round_from(3.0));
/// assert_eq!(p8e1::round_from(p16::round_from(-0.1)), p8e1::round_from(-0.1));
/// ```
pub fn narrow<const ES: u32>(x: Posit<16, 2, i16>) -> Posit<8, ES, i8> {
  match x.try_decode() {
    TryDecoded::Zero => Posit::ZERO,
    TryDecoded::NaR => Posit::NAR,
    TryDecoded::Regular(x) => Decoded {
      sign: x.sign,
      exp: x.exp,
      mant: (x.mant >> 8) as u8,
    }.encode_regular(),
  }
}

/// Convert a [`p16`](crate::p16) into a [`p8e2`](crate::p8e2), **rounding to nearest**, ties to
/// the even bit pattern, instead of truncating like [`narrow`].
///
/// The result saturates like every other conversion: it is never 0 or NaR unless `x` is.
///
/// # Examples
///
/// ```
/// # use small_posit::*;
/// assert_eq!(narrow_round(p16::from_bits(0x4cff)), p8e2::from_bits(0x4d));
/// assert_eq!(narrow_round(p16::from_bits(0x4c80)), p8e2::from_bits(0x4c));
/// assert_eq!(narrow_round(p16::MAX), p8e2::MAX);
/// assert_eq!(narrow_round(p16::MIN_POSITIVE), p8e2::MIN_POSITIVE);
/// ```
pub fn narrow_round(x: Posit<16, 2, i16>) -> Posit<8, 2, i8> {
  // The chopped off bits except the last (leftmost bit among those chopped off) are stored in
  // `sticky`, the last chopped bit is stored in `round`.
  let bits = x.to_bits();
  let sticky = bits & 0x7f != 0;
  let round = (bits >> 7) & 1 != 0;
  let truncated = (bits >> 8) as i8;
  // Recall the rounding rule: "round to nearest, if tied round to even bit pattern".
  //
  //   bits | round | sticky | result
  //   ...x | 0     | x      | round down (+0)
  //   ...0 | 1     | 0      | round down to even (+0)
  //   ...1 | 1     | 0      | round up to even (+1)
  //   ...x | 1     | 1      | round up (+1)
  //
  // That is, round up iff `round & (lsb | sticky)`.
  let round_up = round && (truncated & 1 != 0 || sticky);
  // But don't truncate a nonzero value to 0 or NaR (round up instead), and don't round up from
  // `0b0111…` to `0b1000…` or from `0b1111…` to `0b0000…` (round down instead).
  let is_special = Posit::<8, 2, i8>::from_bits(truncated).is_special();
  let round_up = round_up || ((round || sticky) && is_special);
  let rounded = truncated.wrapping_add(i8::from(round_up));
  let overflow = (rounded ^ truncated) < 0;
  Posit::from_bits(rounded.wrapping_sub(i8::from(overflow)))
}

impl<const ES: u32> From<Posit<8, ES, i8>> for Posit<16, 2, i16> {
  /// Widen an 8-bit posit, exactly. See [`widen`].
  fn from(value: Posit<8, ES, i8>) -> Self {
    widen(value)
  }
}

impl<const ES: u32> RoundFrom<Posit<16, 2, i16>> for Posit<8, ES, i8> {
  /// Narrow a 16-bit posit, truncating. See [`narrow`].
  fn round_from(value: Posit<16, 2, i16>) -> Self {
    narrow(value)
  }
}
