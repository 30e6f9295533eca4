use super::*;

/// Used to do value-to-value conversions that may lose precision. It is the reciprocal of
/// [`RoundInto`].
///
/// The interface is identical to the standard [`From`]; but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_: when the value doesn't fit in the target type, it
/// is **truncated** (see below).
///
/// The exact meaning of these conversions depends on the types involved; for the exact description
/// of what each particular conversion does, **consult the documentation for specific
/// implementations of `round_from`**.
///
/// Many of the usage guidelines for [`From`] also apply to [`RoundFrom`]: prefer implementing
/// [`RoundFrom`] over [`RoundInto`], because implementing [`RoundFrom`] automatically provides one
/// with an implementation of [`RoundInto`], and prefer using [`RoundInto`] over [`RoundFrom`] when
/// specifying trait bounds on a generic function. There's also a blanket implementation of
/// `RoundFrom<T> for T`.
///
/// # Truncation
///
/// Conversions into posits, like posit arithmetic, round **toward zero** and **saturate**:
///
///   - If the value is greater in absolute value than the biggest posit, it converts to it (i.e.
///     never overflow).
///   - If the value is nonzero but smaller in absolute value than the smallest positive posit, it
///     converts to it (i.e. never underflow). Floats at or below [`Posit::EPSILON`] are the
///     exception: they are flushed to zero.
///   - Otherwise, drop the bits that don't fit, i.e. take the closest posit between zero and the
///     value.
///
/// # Examples
///
/// Converting from ints, floats:
/// ```
/// # use small_posit::*;
/// assert_eq!(p16::round_from(1), p16::ONE);
/// assert_eq!(p16::round_from(1.0001), p16::ONE);
/// assert_eq!(p16::round_from(-0.9999), -p16::ONE.prior());
///
/// assert_eq!(p16::round_from(f64::NAN), p16::NAR);
/// ```
///
/// Converting to ints, floats:
/// ```
/// # use small_posit::*;
/// assert_eq!(f32::round_from(p16::MIN_POSITIVE), 1.3877788e-17);
/// assert_eq!(i64::round_from(p8e2::MAX), 1 << 24);
///
/// assert!(f64::round_from(p16::NAR).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, truncating if the value doesn't fit.
  ///
  /// If you're looking for the usual Rust-y conversions ([`From`] if exact, [`TryFrom`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may lose precision. It is the reciprocal of
/// [`RoundFrom`], which see for details.
///
/// # Examples
///
/// ```
/// # use small_posit::*;
/// assert_eq!(p16::ONE.next(), 1.0004883_f64.round_into());
/// assert_eq!(p8::ONE.next(), 1.04_f32.round_into());
///
/// assert_eq!(5.9604645e-8_f32, p8e2::MIN_POSITIVE.round_into());
/// assert_eq!(1_i64 << 56, p16::MAX.round_into());
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, truncating if the value doesn't
  /// fit.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
mod posit;

pub use posit::{widen, narrow, narrow_round};
