use super::*;

/// Square root, by Newton-Raphson iteration on the fraction.
mod sqrt;

/// Low-precision trigonometry, for 16-bit posits only.
mod trig;
