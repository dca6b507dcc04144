//! # Floating point numbers
//!
//! Floats are stored as their IEEE-754 bit patterns so that values can be
//! compared, ordered, and hashed bit-exactly; a wire round trip reproduces
//! the original bits even for NaN payloads.
//!
//! ```
//! use syrup::{float::Float, Syrup};
//!
//! let f = Float::from(1.5f32);
//! assert_eq!(f.to_f32(), Some(1.5));
//!
//! let d = Syrup::from(2.5f64);
//! assert_eq!(d, Syrup::from(2.5f64));
//! ```

use crate::from_fn;

/// A single- or double-precision float, as raw bits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Debug)]
pub enum Float {
    /// IEEE-754 binary32 bit pattern.
    Single(u32),
    /// IEEE-754 binary64 bit pattern.
    Double(u64),
}

use Float::*;

impl Float {
    /// The value as an `f32`, if this is a single-precision float.
    pub fn to_f32(self) -> Option<f32> {
        match self {
            Single(bits) => Some(f32::from_bits(bits)),
            Double(_) => None,
        }
    }

    /// The value as an `f64`, if this is a double-precision float.
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Single(_) => None,
            Double(bits) => Some(f64::from_bits(bits)),
        }
    }
}

impl std::fmt::Display for Float {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Single(bits) => write!(f, "{}", f32::from_bits(*bits)),
            Double(bits) => write!(f, "{}", f64::from_bits(*bits)),
        }
    }
}

from_fn!(Float, f32, |f: f32| Single(f.to_bits()));
from_fn!(Float, f64, |f: f64| Double(f.to_bits()));

impl std::convert::TryFrom<Float> for f32 {
    type Error = Float;

    fn try_from(f: Float) -> Result<f32, Float> { f.to_f32().ok_or(f) }
}

impl std::convert::TryFrom<Float> for f64 {
    type Error = Float;

    fn try_from(f: Float) -> Result<f64, Float> { f.to_f64().ok_or(f) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_exact() {
        let nan = f32::from_bits(0x7FC0_0001);
        match Float::from(nan) {
            Single(bits) => assert_eq!(bits, 0x7FC0_0001),
            Double(_) => panic!("wrong width"),
        }
    }

    #[test]
    fn negative_zero_is_distinct() {
        assert_ne!(Float::from(0.0f64), Float::from(-0.0f64));
    }
}
