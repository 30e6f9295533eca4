use super::*;

// `Int` only gets its bounds through `Sealed`, so `#[derive(PartialEq)]` on `Posit` would add a
// spurious `Int: PartialEq` bound to the impl. Implement them by hand instead.
//
// Comparing the bit patterns as signed integers also gives the correct ordering of the real
// values: two's complement negation of a posit is negation of its value, and positive posits are
// monotonic in their bits. NaR, being `Int::MIN`, compares less than every other posit.

impl<const N: u32, const ES: u32, Int: crate::Int>
Clone for Posit<N, ES, Int> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Copy for Posit<N, ES, Int> {}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialEq for Posit<N, ES, Int> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Eq for Posit<N, ES, Int> {}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialOrd for Posit<N, ES, Int> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Ord for Posit<N, ES, Int> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.0.cmp(&other.0)
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::hash::Hash for Posit<N, ES, Int> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

/// The default posit is [zero](Posit::ZERO).
impl<const N: u32, const ES: u32, Int: crate::Int>
Default for Posit<N, ES, Int> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;

  #[test]
  fn default_is_zero() {
    assert_eq!(crate::p16::default(), crate::p16::ZERO);
    assert_eq!(crate::p8e1::default(), crate::p8e1::ZERO);
  }

  #[test]
  fn nar_is_least() {
    assert!(crate::p16::NAR < crate::p16::MIN);
    assert!(crate::p8::NAR < crate::p8::MIN);
  }

  /// Ordering the bit patterns orders the values.
  fn ordered_like_values<const N: u32, const ES: u32, Int: crate::Int>() -> bool
  where
    Rational: TryFrom<Posit<N, ES, Int>, Error = super::rational::IsNaR>,
  {
    let mut posits: Vec<_> = Posit::<N, ES, Int>::cases_exhaustive().collect();
    posits.push(Posit::ZERO);
    posits.sort();
    posits.windows(2).all(|w| {
      Rational::try_from(w[0]).unwrap() < Rational::try_from(w[1]).unwrap()
    })
  }

  #[test]
  fn p8_ordered() {
    assert!(ordered_like_values::<8, 0, i8>());
    assert!(ordered_like_values::<8, 1, i8>());
    assert!(ordered_like_values::<8, 2, i8>());
  }

  #[test]
  fn p16_ordered() {
    assert!(ordered_like_values::<16, 2, i16>());
  }
}
