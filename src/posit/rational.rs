use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Pow, Abs, Reciprocal};

/// The error type returned when a [Posit] cannot be converted to a [Rational] because it is
/// [NaR](Posit::NAR).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the posit format, reading
  /// one bit at a time, since this is what we will check our optimised implementations against!
  fn into_rational_regular(self) -> Rational {
    let x: i32 = self.0.into();
    let nar: i32 = Int::MIN.into();
    if x == 0 || x == nar { panic!("Should not pass {x:b} to into_rational_regular") }

    // First extract the sign; the rest takes place with the two's complement absolute value.
    let sign = x < 0;
    let abs = x.unsigned_abs();

    // The `N - 1` bits after the sign bit, most significant first.
    let mut bits = (0 .. N - 1).rev().map(|i| abs >> i & 1 == 1).peekable();

    // The regime is a run of identical bits, terminated by the opposite bit or by the end of the
    // posit. It is
    //   -n  if it's a run of n 0s, or
    //   n-1 if it's a run of n 1s.
    let first = *bits.peek().unwrap();
    let mut run = 0i64;
    while bits.next_if_eq(&first).is_some() { run += 1 }
    let _terminating = bits.next();
    let regime = if first { run - 1 } else { -run };

    // The next ES bits (or fewer, if the posit ends first) are the exponent. Missing bits are 0s.
    let mut exponent = 0i64;
    for _ in 0 .. ES {
      exponent = 2 * exponent + bits.next().unwrap_or(false) as i64;
    }

    // The remaining bits are the fraction, with an implicit leading 1.
    let mut fraction = Rational::from(1);
    let mut weight = Rational::from_signeds(1, 2);
    for bit in bits {
      if bit { fraction += &weight }
      weight /= Rational::from(2);
    }

    // Assemble the final number
    let useed = Rational::power_of_2(1i64 << ES);
    let value = useed.pow(regime) * Rational::power_of_2(exponent) * fraction;
    if sign { -value } else { value }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> TryFrom<Posit<N, ES, Int>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Int>) -> Result<Self, Self::Error> {
    if value == Posit::ZERO {
      Ok(Rational::from(0))
    } else if value == Posit::NAR {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> From<Decoded<N, ES, Int>> for Rational {
  fn from(value: Decoded<N, ES, Int>) -> Self {
    let mant: u32 = value.mant.into();
    let abs =
      Rational::from(mant)
      / Rational::power_of_2(i64::from(Posit::<N, ES, Int>::FRAC_WIDTH))
      * Rational::power_of_2(i64::from(value.exp));
    if value.sign { -abs } else { abs }
  }
}

/// Check whether `posit` is `exact` **truncated**, i.e. rounded toward zero, and saturated.
///
///   - Only the exact number 0 gives posit 0, and no number gives posit NaR.
///   - Over- or under-flow (|exact| ≥ |[Posit::MAX]| or ≤ |[Posit::MIN_POSITIVE]|): saturate
///     to [Posit::MAX] or [Posit::MIN_POSITIVE] (or their negatives) respectively.
///   - Otherwise: the posit of the same sign as `exact` with the largest magnitude not exceeding
///     `|exact|`.
pub fn is_correct_truncated<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  if posit == Posit::<N, ES, Int>::ZERO { return exact == Rational::from(0) }
  if posit == Posit::<N, ES, Int>::NAR { return false }
  if exact == Rational::from(0) { return false }

  let is_negative = exact < Rational::from(0);
  if is_negative != (posit < Posit::ZERO) { return false }

  // Work with magnitudes from here on.
  let exact = exact.abs();
  let posit = if is_negative { -posit } else { posit };

  let max = Rational::try_from(Posit::<N, ES, Int>::MAX).unwrap();
  let min_positive = Rational::try_from(Posit::<N, ES, Int>::MIN_POSITIVE).unwrap();
  if exact >= max { return posit == Posit::<N, ES, Int>::MAX }
  if exact <= min_positive { return posit == Posit::<N, ES, Int>::MIN_POSITIVE }

  // `posit` represents exactly the number `curr`, and the next one up represents `next`.
  let curr = Rational::try_from(posit).unwrap();
  if posit == Posit::<N, ES, Int>::MAX { return curr <= exact }
  let next = Rational::try_from(posit.next()).unwrap();
  curr <= exact && exact < next
}

/// As [`is_correct_truncated`], where an `exact` of [`IsNaR`] must give NaR.
pub fn try_is_correct_truncated<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_truncated(exact, posit),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

/// As [`try_is_correct_truncated`], but also accept a `posit` one step further from zero than the
/// truncated result. This is the accuracy of addition of operands with opposite signs, where the
/// bits of the smaller operand that are shifted out are lost before the subtraction.
pub fn try_is_truncated_within_one<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  let toward_zero =
    if posit > Posit::ZERO { posit.prior() }
    else if posit < Posit::ZERO && posit != Posit::NAR { posit.next() }
    else { posit };
  match exact {
    Ok(exact) => is_correct_truncated(exact.clone(), posit) || is_correct_truncated(exact, toward_zero),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

/// Check whether the rational number `exact` should be **rounded** to `posit`.
///
///   - Over- or under-flow (exponent < [Posit::MIN_EXP] or > [Posit::MAX_EXP]): round to
///     [Posit::MIN] or [Posit::MAX] respectively.
///   - Geometric case (on the edges of the dynamic range, where exponent bits are cut): round to
///     nearest posit in terms of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
pub fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  // Only the exact number 0 is rounded to posit 0.
  if posit == Posit::<N, ES, Int>::ZERO { return exact == Rational::from(0) }
  // No number is rounded to posit NaR.
  if posit == Posit::<N, ES, Int>::NAR { return false }

  // Overflow case: if exact is > MAX, < MIN, > 0 and < MIN_POSITIVE, or < 0 and > MAX_NEGATIVE
  if exact > Rational::from(0) {
    if exact >= Rational::try_from(Posit::<N, ES, Int>::MAX).unwrap() {
      return posit == Posit::<N, ES, Int>::MAX
    }
    else if exact <= Rational::try_from(Posit::<N, ES, Int>::MIN_POSITIVE).unwrap() {
      return posit == Posit::<N, ES, Int>::MIN_POSITIVE
    }
  } else if exact < Rational::from(0) {
    if exact <= Rational::try_from(Posit::<N, ES, Int>::MIN).unwrap() {
      return posit == Posit::<N, ES, Int>::MIN
    }
    else if exact >= Rational::try_from(Posit::<N, ES, Int>::MAX_NEGATIVE).unwrap() {
      return posit == Posit::<N, ES, Int>::MAX_NEGATIVE
    }
  } else {
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + ES > N`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding. This
    // corresponds to an exponent of `(N - 2 - ES) << ES`.
    let geometric_cutoff = Rational::power_of_2(((N - 2 - ES) as i64) << ES);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x-y
      } else {
        if x.abs() >= y.abs() {x/y} else {y/x}
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = Rational::try_from(posit).unwrap();
  let next = Rational::try_from(posit.next());
  let bits: u32 = posit.to_bits_unsigned().into();
  let posit_is_even = bits & 1 == 0;

  if exact == curr {
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually test all positive bit patterns of an 8-bit posit with 0-bit exponent, which has
  /// `useed = 2`.
  #[test]
  fn exhaustive_posit_8_0_regimes() {
    type Posit = crate::p8;

    assert_eq!(Rational::try_from(Posit::from_bits(0)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Posit::NAR), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b0_0000001, (1, 64)),
      (0b0_0000010, (1, 32)),
      (0b0_0000011, (3, 64)),
      (0b0_0001000, (1, 8)),
      (0b0_0001100, (3, 16)),
      (0b0_01_00000, (1, 2)),
      (0b0_01_10000, (3, 4)),
      (0b0_10_00000, (1, 1)),
      (0b0_10_10000, (3, 2)),
      (0b0_10_11000, (7, 4)),
      (0b0_110_0000, (2, 1)),
      (0b0_110_1000, (3, 1)),
      (0b0_1110_100, (6, 1)),
      (0b0_111110_1, (24, 1)),
      (0b0_1111110, (32, 1)),
      (0b0_1111111, (64, 1)),
    ] {
      assert_eq!(Posit::from_bits( bits).try_into(), Ok(Rational::from_signeds( num, den)));
      assert_eq!(Posit::from_bits(-bits).try_into(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  /// More manual examples.
  #[test]
  #[allow(overflowing_literals)]
  fn examples() {
    assert_eq!(crate::p8e1::from_bits(0b0_10_0_1000).try_into(), Ok(Rational::from_signeds(3, 2)));
    assert_eq!(crate::p8e1::from_bits(0b0_01_1_0000).try_into(), Ok(Rational::from_signeds(1, 2)));
    assert_eq!(crate::p8e1::MAX.try_into(), Ok(Rational::from(4096)));
    assert_eq!(crate::p8e2::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1 << 24)));
    assert_eq!(crate::p8e2::from_bits(0b1_10_01_100).try_into(), Ok(Rational::from_signeds(-3, 8)));

    assert_eq!(crate::p16::from_bits(0b0_01_00_10000001000).try_into(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(crate::p16::from_bits(0b0_01_00_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 15)));
    assert_eq!(crate::p16::from_bits(0b0_01_01_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(crate::p16::from_bits(0b0_01_10_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 13)));
    assert_eq!(crate::p16::from_bits(0b0_01_11_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(crate::p16::from_bits(0b0_11110_10_11001000).try_into(), Ok(Rational::from(456 << 6)));
    assert_eq!(crate::p16::from_bits(0b0_11110_01_11001000).try_into(), Ok(Rational::from(456 << 5)));

    assert_eq!(crate::p16::from_bits(0b1_00001_10_00111000).try_into(), Ok(Rational::from(-456 << 5)));
    assert_eq!(crate::p16::from_bits(0b1_00001_01_00111000).try_into(), Ok(Rational::from(-456 << 6)));
    assert_eq!(crate::p16::from_bits(0b1_001_01_0100111000).try_into(), Ok(Rational::from_signeds(-1736, 1 << 4)));
    assert_eq!(crate::p16::from_bits(0b1_1110_10_100111000).try_into(), Ok(Rational::from_signeds(-712, 1 << 20)));

    assert_eq!(crate::p16::from_bits(0b1_11111111111110_1_).try_into(), Ok(Rational::from_signeds(-1, 1i64 << 50)));
    assert_eq!(crate::p16::from_bits(0b1_11111111111110_0_).try_into(), Ok(Rational::from_signeds(-1, 1i64 << 48)));
    assert_eq!(crate::p16::from_bits(0b0_11111111110_00_10).try_into(), Ok(Rational::from(3i64 << 35)));

    assert_eq!(crate::p16::MAX.try_into(), Ok(Rational::from(1i64 << 56)));
    assert_eq!(crate::p16::MIN.try_into(), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(crate::p16::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!(crate::p16::MAX_NEGATIVE.try_into(), Ok(Rational::from_signeds(1, -1i64 << 56)));

    assert_eq!(crate::p16::ZERO.try_into(), Ok(Rational::from(0)));
    assert_eq!(crate::p16::ONE.try_into(), Ok(Rational::from(1)));
    assert_eq!(crate::p16::MINUS_ONE.try_into(), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(crate::p16::NAR), Err(IsNaR));
  }

  #[test]
  fn truncated() {
    let one = crate::p16::ONE;
    assert!(is_correct_truncated(Rational::from(1), one));
    assert!(is_correct_truncated(Rational::from_signeds(1_000_001, 1_000_000), one));
    assert!(!is_correct_truncated(Rational::from_signeds(999_999, 1_000_000), one));
    assert!(is_correct_truncated(Rational::from_signeds(-1_000_001, 1_000_000), -one));
    assert!(!is_correct_truncated(Rational::from(-1), one));
    assert!(is_correct_truncated(Rational::from(1i64 << 60), crate::p16::MAX));
    assert!(is_correct_truncated(Rational::from_signeds(-1, 1i64 << 60), crate::p16::MAX_NEGATIVE));
    assert!(!is_correct_truncated(Rational::from_signeds(1, 1i64 << 60), crate::p16::ZERO));
    assert!(try_is_correct_truncated(Err(IsNaR), crate::p16::NAR));
  }

  #[test]
  fn truncated_just_below_max() {
    let max = crate::p16::MAX;
    let below = Rational::try_from(max).unwrap() - Rational::try_from(crate::p16::MIN_POSITIVE).unwrap();
    assert!(!is_correct_truncated(below.clone(), max));
    assert!(is_correct_truncated(below.clone(), max.prior()));
    assert!(!is_correct_truncated(-below.clone(), -max));
    assert!(try_is_truncated_within_one(Ok(below), max));
    assert!(is_correct_truncated(Rational::try_from(max).unwrap(), max));
  }
}
