//! # Integers
//!
//! Wire integers are signed and of unbounded magnitude. Values that fit an
//! `i64` stay on the small branch; everything else is a [`BigInt`].

use crate::{from_as, from_fn};
use num_bigint::BigInt;
use num_traits::cast::ToPrimitive;
use std::{cmp::Ordering, convert::TryFrom};

/// [`Inum`]s are either [`i64`]s or [`BigInt`]s (i.e., big integers).
///
/// The `Int` branch never holds a value that would fit in an `i64`; every
/// constructor normalizes, so equality and hashing are well defined.
#[derive(Eq, PartialEq, Ord, Clone, Hash, Debug)]
pub enum Inum {
    /// Small integer.
    I64(i64),
    /// Large integer.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::inum::Inum;
    ///
    /// let large = Inum::from(i64::min_value() as i128 - 1);
    ///
    /// assert!(large < Inum::from(i64::min_value()));
    /// ```
    Int(BigInt),
}

impl std::fmt::Display for Inum {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            I64(i) => write!(f, "{}", i),
            Int(i) => write!(f, "{}", i),
        }
    }
}

impl PartialOrd for Inum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (Int(a), I64(b)) => a.cmp(&BigInt::from(*b)),
            (I64(a), Int(b)) => BigInt::from(*a).cmp(b),
        })
    }
}

use Inum::*;

impl Inum {
    /// Whether the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            I64(i) => *i < 0,
            Int(i) => i.sign() == num_bigint::Sign::Minus,
        }
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            I64(i) => *i == 0,
            // the big branch never holds small values
            Int(_) => false,
        }
    }

    /// Builds an integer from an unsigned magnitude and a sign, the way the
    /// text scanner delivers them.
    pub fn from_magnitude(magnitude: u64, negative: bool) -> Inum {
        if !negative {
            Inum::from(magnitude)
        } else if magnitude <= i64::max_value() as u64 + 1 {
            I64((magnitude as i128).wrapping_neg() as i64)
        } else {
            Int(-BigInt::from(magnitude))
        }
    }
}

// From implementations

// i64 -> Inum
from_fn!(Inum, i64, I64);

// u64 -> Inum
from_fn!(Inum, u64, |u| {
    let i = u as i64;
    if i >= 0 {
        I64(i)
    } else {
        Int(BigInt::from(u))
    }
});

// BigInt -> Inum
from_fn!(Inum, BigInt, |i: BigInt| {
    match i.to_i64() {
        Some(j) => I64(j),
        None => Int(i),
    }
});

// Inum -> BigInt
from_fn!(BigInt, Inum, |i: Inum| {
    match i {
        Inum::I64(i) => BigInt::from(i),
        Inum::Int(i) => i,
    }
});

// i128 -> Inum
from_fn!(Inum, i128, |i| {
    if i <= i64::max_value() as i128 && i >= i64::min_value() as i128 {
        I64(i as i64)
    } else {
        Int(BigInt::from(i))
    }
});

// u128 -> Inum
from_fn!(Inum, u128, |i| {
    if i <= i64::max_value() as u128 {
        I64(i as i64)
    } else {
        Int(BigInt::from(i))
    }
});

// usize -> Inum
from_fn!(Inum, usize, |i| { Inum::from(i as u64) });

// isize -> Inum
from_fn!(Inum, isize, |i| { Inum::from(i as i64) });

// TryFrom implementations
impl TryFrom<Inum> for i64 {
    type Error = BigInt;

    fn try_from(i: Inum) -> Result<Self, BigInt> {
        match i {
            Inum::I64(i) => Ok(i),
            Inum::Int(i) => Err(i),
        }
    }
}

impl TryFrom<Inum> for u64 {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> {
        match &n {
            Inum::I64(i) => {
                if *i >= 0 {
                    Ok(*i as u64)
                } else {
                    Err(n)
                }
            }
            Inum::Int(i) => i.to_u64().ok_or(n),
        }
    }
}

impl TryFrom<Inum> for i32 {
    type Error = Inum;

    fn try_from(i: Inum) -> Result<Self, Inum> {
        match i64::try_from(i) {
            Ok(v) => {
                if v >= i32::min_value() as i64 && v <= i32::max_value() as i64 {
                    Ok(v as i32)
                } else {
                    Err(Inum::from(v))
                }
            }
            Err(e) => Err(Int(e)),
        }
    }
}

impl TryFrom<Inum> for u32 {
    type Error = Inum;

    fn try_from(i: Inum) -> Result<Self, Inum> {
        match u64::try_from(i) {
            Ok(v) => {
                if v <= u32::max_value() as u64 {
                    Ok(v as u32)
                } else {
                    Err(Inum::from(v))
                }
            }
            Err(e) => Err(e),
        }
    }
}

impl TryFrom<Inum> for u128 {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> {
        match &n {
            Inum::I64(i) => {
                if *i >= 0 {
                    Ok(*i as u128)
                } else {
                    Err(n)
                }
            }
            Inum::Int(i) => i.to_u128().ok_or(n),
        }
    }
}

impl TryFrom<Inum> for i128 {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> {
        match &n {
            Inum::I64(i) => Ok(*i as i128),
            Inum::Int(i) => i.to_i128().ok_or(n),
        }
    }
}

impl TryFrom<Inum> for usize {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> { Ok(u64::try_from(n)? as usize) }
}

impl TryFrom<Inum> for isize {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> { Ok(i64::try_from(n).map_err(Int)? as isize) }
}

#[macro_export]
/// Helper macro.
macro_rules! from_prims {
    ($to:tt) => {
        from_as!($to, i32, i64);
        from_as!($to, i16, i64);
        from_as!($to, i8, i64);

        from_as!($to, u32, i64);
        from_as!($to, u16, i64);
        from_as!($to, u8, i64);
    };
}

from_prims!(Inum);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_small_branch() {
        match Inum::from(BigInt::from(17)) {
            I64(17) => (),
            other => panic!("should be small: {:?}", other),
        }
    }

    #[test]
    fn magnitude_edges() {
        assert_eq!(Inum::from_magnitude(0, false), I64(0));
        assert_eq!(Inum::from_magnitude(43, true), I64(-43));
        assert_eq!(
            Inum::from_magnitude(i64::max_value() as u64 + 1, true),
            I64(i64::min_value())
        );
        match Inum::from_magnitude(u64::max_value(), true) {
            Int(i) => assert_eq!(i, -BigInt::from(u64::max_value())),
            I64(_) => panic!("should be big"),
        }
    }
}
