use super::{Int, Sealed};

/// Implementation of all functions, which are the same for every width.
macro_rules! impl_common {
  ($int:ty, $uint:ty) => {
    type Unsigned = $uint;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = <$int>::MIN;
    const MAX: Self = <$int>::MAX;
    const BITS: u32 = <$int>::BITS;

    #[inline]
    fn as_unsigned(self) -> $uint { self as $uint }

    #[inline]
    fn of_unsigned(x: $uint) -> Self { x as $int }

    #[inline]
    fn is_positive(self) -> bool {
      self >= 0
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }

    #[inline]
    fn wrapping_abs(self) -> Self { self.wrapping_abs() }

    #[inline]
    fn magnitude(self) -> u32 { u32::from(self.unsigned_abs()) }
  }
}

impl Int for i16 {}
impl Sealed for i16 {
  impl_common!{i16, u16}
}

impl Int for i8 {}
impl Sealed for i8 {
  impl_common!{i8, u8}
}
