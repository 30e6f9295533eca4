//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::posit::{Posit, Decoded};
use crate::trace::NoTrace;
use crate::{RoundFrom, RoundInto};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// `self` must not be 0 or NaR.
  pub fn bench_decode_regular(self) -> Decoded<N, ES, Int> {
    self.decode_regular()
  }

  pub fn bench_add_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> Option<Decoded<N, ES, Int>> {
    Self::add_kernel(a, b)
  }

  pub fn bench_mul_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> Decoded<N, ES, Int> {
    Self::mul_kernel(a, b)
  }

  pub fn bench_div_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> Decoded<N, ES, Int> {
    Self::div_kernel(a, b)
  }

  /// `a` must be positive.
  pub fn bench_sqrt_kernel(a: Decoded<N, ES, Int>) -> Decoded<N, ES, Int> {
    Self::sqrt_kernel(a, &mut NoTrace)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  pub fn bench_encode_regular(self) -> Posit<N, ES, Int> {
    self.encode_regular()
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn decode_8(arg: Posit<8, 2, i8>) -> Decoded<8, 2, i8> {
  arg.decode_regular()
}

#[unsafe(no_mangle)]
pub fn decode_16(arg: Posit<16, 2, i16>) -> Decoded<16, 2, i16> {
  arg.decode_regular()
}

#[unsafe(no_mangle)]
pub fn encode_8(arg: Decoded<8, 2, i8>) -> Posit<8, 2, i8> {
  arg.encode_regular()
}

#[unsafe(no_mangle)]
pub fn encode_16(arg: Decoded<16, 2, i16>) -> Posit<16, 2, i16> {
  arg.encode_regular()
}

//

#[unsafe(no_mangle)]
pub fn add_8(x: Posit<8, 2, i8>, y: Posit<8, 2, i8>) -> Posit<8, 2, i8> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn add_16(x: Posit<16, 2, i16>, y: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn sub_16(x: Posit<16, 2, i16>, y: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.sub(y)
}

#[unsafe(no_mangle)]
pub fn mul_8(x: Posit<8, 2, i8>, y: Posit<8, 2, i8>) -> Posit<8, 2, i8> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn mul_16(x: Posit<16, 2, i16>, y: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn div_8(x: Posit<8, 2, i8>, y: Posit<8, 2, i8>) -> Posit<8, 2, i8> {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn div_16(x: Posit<16, 2, i16>, y: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn sqrt_16(x: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn sin_16(x: Posit<16, 2, i16>) -> Posit<16, 2, i16> {
  x.sin()
}

//

#[unsafe(no_mangle)]
pub fn round_i32_to_p8(num: i32) -> crate::p8 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_i32_to_p16(num: i32) -> crate::p16 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_p16_to_i32(num: crate::p16) -> i32 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_f32_to_p16(num: f32) -> crate::p16 {
  crate::p16::round_from(num)
}

#[unsafe(no_mangle)]
pub fn p16_to_f32(num: crate::p16) -> f32 {
  num.to_f32()
}

//

#[unsafe(no_mangle)]
pub fn widen_p8(num: crate::p8e2) -> crate::p16 {
  crate::widen(num)
}

#[unsafe(no_mangle)]
pub fn narrow_p16(num: crate::p16) -> crate::p8e2 {
  crate::narrow(num)
}

#[unsafe(no_mangle)]
pub fn narrow_round_p16(num: crate::p16) -> crate::p8e2 {
  crate::narrow_round(num)
}
