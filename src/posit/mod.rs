//! This module and its submodules contain a software implementation of 8-bit and 16-bit Posit
//! floating point types, with an exponent field of up to 2 bits.
//!
//! The implementation is deliberately simple: every operation decodes its operands into a
//! sign, a power-of-two exponent, and a mantissa with an explicit leading 1 ([`Decoded`]), works
//! on those with plain unsigned integer arithmetic, and then encodes the result again. Results
//! are **truncated** (rounded toward zero) rather than rounded to nearest, and they saturate:
//! a nonzero value never becomes zero, and a real value never becomes NaR.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.

use crate::underlying::Unsigned;

/// A Posit floating point number with `N` bits and `ES` exponent bits, using `Int` as its
/// underlying type.
///
/// `N` must be 8 or 16 and equal to the width of `Int`, and `ES` must be at most 2; this is
/// checked at compile time.
///
/// Examples:
///
/// ```
/// # use small_posit::Posit;
/// type Foo = Posit::<16, 2, i16>;  // A 16-bit posit with 2-bit exponent field
/// type Bar = Posit::<8, 1, i8>;  // An 8-bit posit with 1-bit exponent field
/// ```
pub struct Posit<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Int);

/// In a posit, the bits that aren't the sign or the regime are the exponent and the fraction.
/// A "decoded" posit is one where those bits have been extracted, giving the number
///
///   `(-1)^sign × (mant / 2^(N-1)) × 2^exp`
///
/// The `mant` field holds the fraction bits *plus* the hidden 1 bit, which sits at the top of the
/// `Int::Unsigned` storage. In other words, `mant` is a fixed-point number in the range
/// `[1.0, 2.0)` with `N - 1` fractional bits. A `Decoded` whose `mant` has its top bit set is
/// [normalised](Decoded::is_normalised); every `Decoded` produced by the codec is.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decoded<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> {
  /// Whether the number is negative.
  pub sign: bool,
  /// The power-of-two exponent, i.e. `regime × 2^ES + exponent`.
  pub exp: i32,
  /// The mantissa, including the hidden bit.
  pub mant: Int::Unsigned,
}

/// Basics
mod basics;

/// Constants (zero, min, min_positive, etc)
mod consts;

/// Decoding (Decompose) a posit into sign, exponent, and mantissa.
mod decode;
pub use decode::TryDecoded;

/// Encoding (Recompose) a sign, exponent, and mantissa into a posit.
mod encode;

/// Manual trait implementations
mod traits;

/// Operations that act on the bit pattern directly: next, prior, neg, abs, sign.
mod unary;

/// Binary arithmetic operators.
mod ops;

/// Square root and trigonometry.
mod math;

/// Conversions to and from floats, ints, and between posits of different widths.
pub mod convert;

/// Debug and display implementations
mod fmt;

/// Test helper utilities
#[cfg(test)]
mod test;

/// Conversion to rationals, used as a test oracle
#[cfg(test)]
mod rational;
