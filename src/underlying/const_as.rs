use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      let u = $x as $u;
      // SAFETY: Because U and $u are guaranteed to be `iX` of the same width, `$u` is `U`;
      // therefore the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, for casting an `i32` into an [`Int`].
/// Used to build the bit patterns of the posit constants.
///
/// ```ignore
/// # use small_posit::underlying::const_as;
/// assert_eq!(const_as::<i16>(0x4000), 0x4000i16);
/// assert_eq!(const_as::<i8>(-1), -1i8);
/// ```
pub const fn const_as<U: Int>(x: i32) -> U {
  const_as_line!(x, i8);
  const_as_line!(x, i16);
  unreachable!() // cannot be const { unreachable!() }
}
