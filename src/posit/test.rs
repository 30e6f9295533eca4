use super::*;
use crate::underlying::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// An iterator through all the posits except 0 and NaR.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    let abs = 1 ..= (i32::MAX >> (u32::BITS - Self::BITS));
    let pos = abs.clone().map(|abs| Self::from_bits(const_as(abs)));
    let neg = abs.map(|abs| Self::from_bits(const_as(-abs)));
    pos.chain(neg)
  }

  /// An iterator through all the posits, including 0 and NaR.
  pub(crate) fn cases_exhaustive_all() -> impl Iterator<Item = Self> {
    Self::cases_exhaustive().chain([Self::ZERO, Self::NAR])
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields posits except 0 and NaR.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (
      any::<bool>(),
      (1 ..= (i32::MAX >> (u32::BITS - Self::BITS))),
    ).prop_map(|(sign, abs)| {
      let bits = if sign {abs} else {-abs};
      Self::from_bits(const_as(bits))
    })
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any posit, including 0 and
  /// NaR.
  pub(crate) fn cases_proptest_all() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    prop_oneof![
      1 => Just(Self::ZERO),
      1 => Just(Self::NAR),
      30 => Self::cases_proptest(),
    ]
  }
}

#[cfg(test)]
mod tests {
  #[test]
  fn cases_exhaustive() {
    let cases: Vec<_> = crate::p8::cases_exhaustive().collect();
    assert_eq!(cases.len(), 254);
    assert_eq!(cases[0], crate::p8::MIN_POSITIVE);
    assert_eq!(cases[126], crate::p8::MAX);
    assert_eq!(cases[127], crate::p8::MAX_NEGATIVE);
    assert_eq!(cases[253], crate::p8::MIN);
    assert_eq!(crate::p16::cases_exhaustive().count(), 65534);
  }

  #[test]
  fn cases_exhaustive_all() {
    let cases: Vec<_> = crate::p8e2::cases_exhaustive_all().collect();
    assert_eq!(cases.len(), 256);
    assert!(cases.contains(&crate::p8e2::ZERO));
    assert!(cases.contains(&crate::p8e2::NAR));
  }
}
