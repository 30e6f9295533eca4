use super::*;

use core::fmt::{Debug, Display, Binary, LowerHex, UpperHex, Formatter, Result};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let bits = self.0;
    f.debug_tuple("Posit")
      .field(&format_args!("0b{bits:0w$b}", w=Int::BITS as usize))
      .finish()
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Decoded<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let mant: u32 = self.mant.into();
    let mant_hidden = mant >> Posit::<N, ES, Int>::FRAC_WIDTH;
    let mant_fraction = mant & (Posit::<N, ES, Int>::HIDDEN - 1);
    let exp_regime = self.exp >> ES;
    let exp_exponent = self.exp & ((1 << ES) - 1);
    let exp_total = self.exp;
    f.debug_struct("Decoded")
      .field("sign", &self.sign)
      .field("exp", &format_args!("{exp_total:+} ({exp_regime:+} × 2^{es} + {exp_exponent})", es=ES))
      .field("mant", &format_args!("0b{mant_hidden:b}_{mant_fraction:0w$b}",
        w=Posit::<N, ES, Int>::FRAC_WIDTH as usize,
      ))
      .finish()
  }
}

/// Prints the value, as an [`f64`] (which is always exact), or `NaR`.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Display for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if *self == Self::NAR {
      f.pad("NaR")
    } else {
      Display::fmt(&self.to_f64(), f)
    }
  }
}

/// Prints the raw bit pattern.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Binary for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Binary::fmt(&self.0, f)
  }
}

/// Prints the raw bit pattern.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> LowerHex for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    LowerHex::fmt(&self.0, f)
  }
}

/// Prints the raw bit pattern.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> UpperHex for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    UpperHex::fmt(&self.0, f)
  }
}
