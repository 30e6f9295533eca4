use super::*;
use crate::trace::{Trace, NoTrace};
use super::super::ops::frac_div;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that is the result of √x, truncated.
  ///
  /// `x` must be normalised and positive; this is checked in debug builds only.
  pub(crate) fn sqrt_kernel(x: Decoded<N, ES, Int>, tracer: &mut impl Trace) -> Decoded<N, ES, Int> {
    debug_assert!(x.is_normalised() && !x.sign);

    // Taking the square root of a number in the form `(1 + f) × 2^exp` has two steps.
    //
    // First, ensure that `exp` is an even number. If it's odd, subtract 1 from `exp` and
    // compensate the fraction accordingly. That is:
    //
    //   f', exp' = f         , exp        if exp is even
    //            = 2(1 + f) - 1, exp - 1    if exp is odd
    //
    // Note that `f'` is in [0, 3). Then √(1 + f') is in [1, 2), and the resulting `exp` is just
    // `exp' / 2`, i.e. `exp >> 1`.
    //
    // Second, find the fraction `g` of the root, i.e. the solution of `(1 + g)² = 1 + f'`. This is
    // the fixed point of the Newton-Raphson update
    //
    //   g ← (g + (f' - g) ÷ (1 + g)) / 2
    //
    // which we run from a seed of `f' / 2`, for at most `SQRT_ITERATIONS` rounds. All of this is
    // done in fixed point with `2 × FRAC_WIDTH` fractional bits, i.e. twice as many as we need in
    // the end; the extra bits are truncated at the end.
    let width = 2 * Self::FRAC_WIDTH;
    let one = 1u32 << width;
    let mant: u32 = x.mant.into();
    let frac = (mant - Self::HIDDEN) << (width - Self::FRAC_WIDTH);
    let frac = if x.exp & 1 != 0 { 2 * frac + one } else { frac };

    let mut guess = frac >> 1;
    for iteration in 0 .. Self::SQRT_ITERATIONS {
      // `(f' - g) ÷ (1 + g)`, clamped to just under 1 in case it isn't a proper fraction (which
      // can only happen for a seed that's still far from the root).
      let num = frac.saturating_sub(guess);
      let den = one + guess;
      let quot = if num < den { frac_div(num, den, width) } else { one - 1 };
      let next = (guess + quot) >> 1;
      tracer.sqrt_step(iteration, next);
      if next == guess {
        break
      }
      guess = next;
    }

    let mant = Self::HIDDEN | guess >> (width - Self::FRAC_WIDTH);
    Decoded {
      sign: false,
      exp: x.exp >> 1,
      mant: Int::Unsigned::of_u32(mant),
    }
  }

  /// Returns the square root of `self`, truncated. If `self` is negative or [NaR](Self::NAR),
  /// returns NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use small_posit::*;
  /// assert_eq!(p16::round_from(4.0).sqrt(), p16::round_from(2.0));
  /// assert_eq!(p16::round_from(2.0).sqrt(), p16::from_bits(0x4350));  // 1.41406…
  /// assert_eq!(p16::MINUS_ONE.sqrt(), p16::NAR);
  /// ```
  pub fn sqrt(self) -> Self {
    self.sqrt_traced(&mut NoTrace)
  }

  /// As [`Self::sqrt`], reporting each Newton-Raphson round to `tracer`.
  pub fn sqrt_traced(self, tracer: &mut impl Trace) -> Self {
    if self < Self::ZERO {
      Self::NAR
    } else if self == Self::ZERO {
      Self::ZERO
    } else {
      Self::sqrt_kernel(self.decode_regular(), tracer).encode_regular()
    }
  }
}
