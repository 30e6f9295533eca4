use super::*;

macro_rules! impl_common {
  ($uint:ty) => {
    const BITS: u32 = <$uint>::BITS;

    #[inline]
    fn of_u32(x: u32) -> Self {
      debug_assert!(<$uint>::try_from(x).is_ok(), "{x:#x} does not fit in {}", stringify!($uint));
      x as $uint
    }
  }
}

impl Unsigned for u8 {
  impl_common!{u8}
}

impl Unsigned for u16 {
  impl_common!{u16}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn of_u32() {
    assert_eq!(<u8 as Unsigned>::of_u32(0xab), 0xab);
    assert_eq!(<u16 as Unsigned>::of_u32(0xabcd), 0xabcd);
    assert_eq!(<u16 as Unsigned>::BITS, 16);
  }
}
