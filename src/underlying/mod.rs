//! This module contains the underlying integer operations needed by the posit codec and
//! arithmetic. These are hidden from the end-user, which only sees the sealed [`Int`] trait,
//! implemented for `i8` and `i16`.

/// The trait for the underlying machine integer types that can be used to represent a posit
/// (only satisfied by `i8` and `i16`).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display +
  core::fmt::Binary + core::fmt::LowerHex + core::fmt::UpperHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  Into<i32>
{
  type Unsigned: Unsigned;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  fn as_unsigned(self) -> Self::Unsigned;
  fn of_unsigned(x: Self::Unsigned) -> Self;

  fn is_positive(self) -> bool;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;

  /// The two's complement magnitude of `self`, zero-extended to a `u32`. `Self::MIN` maps to
  /// `1 << (BITS - 1)`.
  ///
  /// ```ignore
  /// assert_eq!((-3i8).magnitude(), 3);
  /// assert_eq!(i8::MIN.magnitude(), 0x80);
  /// ```
  fn magnitude(self) -> u32;
}

/// This trait models the unsigned counterpart to an [`Int`], used for the mantissa of a decoded
/// posit.
pub trait Unsigned:
  core::fmt::Debug + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  Into<u32>
{
  const BITS: u32;

  /// Keep the lowest [`Unsigned::BITS`] of `x`. In debug builds, checks that no set bit is lost.
  fn of_u32(x: u32) -> Self;
}

mod int;
mod unsigned;
mod const_as;
pub use const_as::const_as;
