//! # Values representable as Syrup.
//!
//! [`SyrupRep`] converts between host values and [`Syrup`] trees. Together
//! with the binary tree decoder this gives typed reads of the binary format:
//!
//! ```
//! use syrup::prelude::*;
//!
//! let enc = encode_binary_full(&vec![1u32, 2, 3]);
//! let dec: Vec<u32> = decode_binary_full(&enc).unwrap().into_rep().unwrap();
//!
//! assert_eq!(dec, vec![1, 2, 3]);
//! ```

use crate::{
    errors::ConversionError,
    inum::Inum,
    vecmap::VecMap,
    vecset::VecSet,
    Bytes, Symbol, Syrup,
};
use num_bigint::BigInt;
use std::convert::TryFrom;

/// A value representable as [`Syrup`].
pub trait SyrupRep: Clone + Sized {
    /// Converts value into [`Syrup`].
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::prelude::*;
    ///
    /// let k_num = 1.to_syrup();
    /// ```
    fn to_syrup(&self) -> Syrup;

    /// Consumes value, converting it into [`Syrup`].
    fn into_syrup(self) -> Syrup { self.to_syrup() }

    /// Converts value from [`Syrup`].
    ///
    /// # Arguments
    ///
    /// `ks: Syrup` - The value to be converted from [`Syrup`].
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::prelude::*;
    ///
    /// let ks = "foo".to_string().into_syrup();
    ///
    /// // should be equal
    /// assert_eq!(String::from_syrup(ks).unwrap(), "foo");
    /// ```
    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError>;
}

impl SyrupRep for Syrup {
    fn to_syrup(&self) -> Syrup { self.clone() }

    fn into_syrup(self) -> Syrup { self }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> { Ok(ks) }
}

impl SyrupRep for bool {
    fn to_syrup(&self) -> Syrup { Syrup::Bool(*self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        ks.to_bool()
            .ok_or_else(|| ConversionError::new("expected a boolean"))
    }
}

impl SyrupRep for Inum {
    fn to_syrup(&self) -> Syrup { Syrup::Num(self.clone()) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        Inum::try_from(ks).map_err(|_| ConversionError::new("expected an integer"))
    }
}

impl SyrupRep for BigInt {
    fn to_syrup(&self) -> Syrup { Syrup::from(self.clone()) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        Inum::from_syrup(ks).map(BigInt::from)
    }
}

/// [`SyrupRep`] for integers that fit in an `i128`.
macro_rules! int_rep {
    ($t:ty) => {
        impl SyrupRep for $t {
            fn to_syrup(&self) -> Syrup { Syrup::from(*self) }

            fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
                let i = Inum::from_syrup(ks)?;
                let wide = i128::try_from(i)
                    .map_err(|_| ConversionError::new("integer out of range"))?;
                <$t>::try_from(wide).map_err(|_| {
                    ConversionError::new(&format!(
                        "integer does not fit in `{}`",
                        stringify!($t)
                    ))
                })
            }
        }
    };
}

// sizes
int_rep!(usize);
int_rep!(isize);

// 8-bit integers
int_rep!(u8);
int_rep!(i8);

// 16-bit integers
int_rep!(u16);
int_rep!(i16);

// 32-bit integers
int_rep!(u32);
int_rep!(i32);

// 64-bit integers
int_rep!(u64);
int_rep!(i64);

impl SyrupRep for i128 {
    fn to_syrup(&self) -> Syrup { Syrup::from(*self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        let i = Inum::from_syrup(ks)?;
        i128::try_from(i).map_err(|_| ConversionError::new("integer does not fit in `i128`"))
    }
}

impl SyrupRep for u128 {
    fn to_syrup(&self) -> Syrup { Syrup::from(*self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        let i = Inum::from_syrup(ks)?;
        u128::try_from(i).map_err(|_| ConversionError::new("integer does not fit in `u128`"))
    }
}

impl SyrupRep for f32 {
    fn to_syrup(&self) -> Syrup { Syrup::from(*self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Flt(f) => {
                f32::try_from(f).map_err(|_| ConversionError::new("expected a single-precision float"))
            }
            _ => Err(ConversionError::new("expected a float")),
        }
    }
}

impl SyrupRep for f64 {
    fn to_syrup(&self) -> Syrup { Syrup::from(*self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Flt(f) => {
                f64::try_from(f).map_err(|_| ConversionError::new("expected a double-precision float"))
            }
            _ => Err(ConversionError::new("expected a float")),
        }
    }
}

impl SyrupRep for String {
    fn to_syrup(&self) -> Syrup { Syrup::Str(self.clone()) }

    fn into_syrup(self) -> Syrup { Syrup::Str(self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        String::try_from(ks).map_err(|_| ConversionError::new("expected a string"))
    }
}

impl SyrupRep for Symbol {
    fn to_syrup(&self) -> Syrup { Syrup::Sym(self.0.clone()) }

    fn into_syrup(self) -> Syrup { Syrup::Sym(self.0) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        Symbol::try_from(ks).map_err(|_| ConversionError::new("expected a symbol"))
    }
}

impl SyrupRep for Bytes {
    fn to_syrup(&self) -> Syrup { Syrup::Byt(self.clone()) }

    fn into_syrup(self) -> Syrup { Syrup::Byt(self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        ks.to_bytes()
            .cloned()
            .ok_or_else(|| ConversionError::new("expected a bytestring"))
    }
}

/// `None` is a plain `false` on the wire, so `Some(true)` has no encoding
/// of its own and cannot be represented.
impl<T: SyrupRep> SyrupRep for Option<T> {
    fn to_syrup(&self) -> Syrup {
        match self {
            None => Syrup::Bool(false),
            Some(t) => t.to_syrup(),
        }
    }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Bool(false) => Ok(None),
            Syrup::Bool(true) => Err(ConversionError::new("`true` is not an optional value")),
            other => T::from_syrup(other).map(Some),
        }
    }
}

impl<T: SyrupRep> SyrupRep for Box<T> {
    fn to_syrup(&self) -> Syrup { T::to_syrup(self) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        T::from_syrup(ks).map(Box::new)
    }
}

impl<T: SyrupRep> SyrupRep for Vec<T> {
    fn to_syrup(&self) -> Syrup { Syrup::Seq(self.iter().map(T::to_syrup).collect()) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Seq(v) => v.into_iter().map(T::from_syrup).collect(),
            _ => Err(ConversionError::new("expected a sequence")),
        }
    }
}

impl<K: SyrupRep + Ord, V: SyrupRep> SyrupRep for VecMap<K, V> {
    fn to_syrup(&self) -> Syrup {
        Syrup::Map(
            self.iter()
                .map(|(k, v)| (k.to_syrup(), v.to_syrup()))
                .collect(),
        )
    }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Map(m) => {
                m.into_iter()
                    .map(|(k, v)| Ok((K::from_syrup(k)?, V::from_syrup(v)?)))
                    .collect()
            }
            _ => Err(ConversionError::new("expected a dictionary")),
        }
    }
}

impl<T: SyrupRep + Ord> SyrupRep for VecSet<T> {
    fn to_syrup(&self) -> Syrup { Syrup::Set(self.iter().map(T::to_syrup).collect()) }

    fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
        match ks {
            Syrup::Set(s) => s.into_iter().map(T::from_syrup).collect(),
            _ => Err(ConversionError::new("expected a set")),
        }
    }
}

macro_rules! tuple_rep {
    ($len:expr, $($typ:ident),*) => {
        impl<$($typ: SyrupRep),*> SyrupRep for ($($typ,)*) {
            #[allow(non_snake_case)]
            fn to_syrup(&self) -> Syrup {
                let ($($typ,)*) = self;
                Syrup::Seq(vec![$($typ.to_syrup()),*])
            }

            #[allow(non_snake_case)]
            fn from_syrup(ks: Syrup) -> Result<Self, ConversionError> {
                match ks {
                    Syrup::Seq(v) => {
                        if v.len() != $len {
                            return Err(ConversionError::new("sequence has the wrong arity"));
                        }
                        let mut vals = v.into_iter();
                        $(let $typ = $typ::from_syrup(vals.next().unwrap())?;)*
                        Ok(($($typ,)*))
                    }
                    _ => Err(ConversionError::new("expected a sequence")),
                }
            }
        }
    };
}

tuple_rep!(1, A);
tuple_rep!(2, A, B);
tuple_rep!(3, A, B, C);
tuple_rep!(4, A, B, C, D);
tuple_rep!(5, A, B, C, D, E);
tuple_rep!(6, A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        let ks = 300u16.to_syrup();
        assert_eq!(u16::from_syrup(ks.clone()).unwrap(), 300);
        assert!(u8::from_syrup(ks).is_err());
    }

    #[test]
    fn optional() {
        let none: Option<u8> = None;
        assert_eq!(none.to_syrup(), Syrup::Bool(false));
        assert_eq!(Option::<u8>::from_syrup(Syrup::Bool(false)).unwrap(), None);
        assert_eq!(
            Option::<u8>::from_syrup(Syrup::from(7)).unwrap(),
            Some(7u8)
        );
        assert!(Option::<u8>::from_syrup(Syrup::Bool(true)).is_err());
    }

    #[test]
    fn tuple_arity() {
        let pair = (1u8, "two".to_string());
        let ks = pair.to_syrup();
        assert_eq!(<(u8, String)>::from_syrup(ks.clone()).unwrap(), pair);
        assert!(<(u8, String, u8)>::from_syrup(ks).is_err());
    }
}
