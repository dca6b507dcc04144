//! # Syrup
//!
//! One value model, two wire formats: the textual Syrup encoding and the
//! Preserves binary encoding. Values round-trip through either; dictionaries
//! and sets always encode in canonical order, so equal values produce
//! byte-identical output.
//!
//! ```
//! use syrup::prelude::*;
//!
//! let value = Syrup::from(vec![Syrup::from(1), Syrup::from("two")]);
//!
//! // text: [1+3"two]
//! let text = encode_text_full(&value);
//! assert_eq!(text, b"[1+3\"two]".to_vec());
//!
//! // and back, streaming
//! let back: Syrup = parse(text.as_slice()).unwrap();
//! assert_eq!(back, value);
//! ```

/// Procedural macros.
pub extern crate syrup_derive;

/// Encoders, decoders, and the streaming parse driver.
pub mod encoding;
/// Error types.
pub mod errors;
/// Float variants.
pub mod float;
/// Integer variants.
pub mod inum;
/// Prelude
pub mod prelude;
/// Types representable as `Syrup`.
pub mod rep;
/// Resumable tokenizer for the text format.
pub mod scan;
/// Helper functions.
pub mod util;
/// A map wrapper around a sorted vector of pairs.
pub mod vecmap;
/// A set wrapper around a sorted vector.
pub mod vecset;

pub use bytes::Bytes;
pub use hashbrown::HashMap;

use float::Float;
use inum::Inum;
use num_bigint::BigInt;
use rep::SyrupRep;
use std::convert::{TryFrom, TryInto};
use vecmap::VecMap;
use vecset::VecSet;

/// A symbol: a UTF-8 identifier, distinguished from a string on the wire.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
pub struct Symbol(pub String);

impl Symbol {
    /// The symbol's name.
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Symbol { Symbol(s.to_string()) }
}

impl From<String> for Symbol {
    fn from(s: String) -> Symbol { Symbol(s) }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// Syrup values.
///
/// The derived `Ord` is a storage order for [`VecMap`] and [`VecSet`]; the
/// canonical order of encoded dictionaries and sets is decided by the
/// writer, over encoded bytes.
pub enum Syrup {
    /// Boolean type.
    Bool(bool),
    /// Integer type.
    Num(Inum),
    /// Float type (single or double precision).
    Flt(Float),
    /// Bytestring type.
    Byt(Bytes),
    /// String type. Always valid UTF-8.
    Str(String),
    /// Symbol type. Always valid UTF-8.
    Sym(String),
    /// Sequence type.
    Seq(Vec<Syrup>),
    /// Set type.
    Set(VecSet<Syrup>),
    /// Dictionary type.
    Map(VecMap<Syrup, Syrup>),
    /// Record type: a label and its fields.
    Rec(Box<Syrup>, Vec<Syrup>),
}

use Syrup::*;

impl Syrup {
    /// Builds a record from a label and its fields.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::{Symbol, Syrup};
    ///
    /// let date = Syrup::record(Symbol::from("date"), vec![Syrup::from(2024)]);
    /// ```
    pub fn record<L: Into<Syrup>>(label: L, fields: Vec<Syrup>) -> Syrup {
        Rec(Box::new(label.into()), fields)
    }

    /// Tries to convert value to a `bool`.
    /// This will return `None` if the value is not a boolean.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::rep::*;
    ///
    /// let b = true.into_syrup();
    ///
    /// assert!(b.to_bool().unwrap());
    /// ```
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Tries to convert value to an `Inum`.
    /// This will return `None` if the value is not an integer.
    pub fn to_inum(&self) -> Option<&Inum> {
        match self {
            Num(i) => Some(i),
            _ => None,
        }
    }

    /// Tries to convert value to `Bytes`.
    /// This will return `None` if the value is not a bytestring.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::Syrup;
    ///
    /// let foo = Syrup::from_static(b"This is an example");
    ///
    /// let foo_bytes = foo.to_bytes().unwrap();
    /// ```
    pub fn to_bytes(&self) -> Option<&Bytes> {
        match self {
            Byt(s) => Some(s),
            _ => None,
        }
    }

    /// The value as `&str`, for strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value's name as `&str`, for symbols.
    pub fn as_sym(&self) -> Option<&str> {
        match self {
            Sym(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a `Syrup` value to a slice of values.
    /// This will return `None` if the value is not a sequence.
    pub fn to_seq(&self) -> Option<&Vec<Syrup>> {
        match self {
            Seq(a) => Some(a),
            _ => None,
        }
    }

    /// Consumes a `Syrup` value, converting it into a vector of values.
    /// This will return `None` if the value is not a sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::rep::*;
    ///
    /// let numbers = vec![1, 2, 3];
    ///
    /// let ks = numbers.into_syrup();
    ///
    /// let k_numbers = ks.into_seq().unwrap();
    /// ```
    pub fn into_seq(self) -> Option<Vec<Syrup>> { self.try_into().ok() }

    /// Converts a `Syrup` value to a `VecMap`.
    /// This will return `None` if the value is not a dictionary.
    pub fn to_map(&self) -> Option<&VecMap<Syrup, Syrup>> {
        match self {
            Map(vmap) => Some(vmap),
            _ => None,
        }
    }

    /// Consumes a `Syrup` value, converting it into a `VecMap`.
    /// This will return `None` if the value is not a dictionary.
    pub fn into_map(self) -> Option<VecMap<Syrup, Syrup>> { self.try_into().ok() }

    /// Converts a `Syrup` value to a `VecSet`.
    /// This will return `None` if the value is not a set.
    pub fn to_set(&self) -> Option<&VecSet<Syrup>> {
        match self {
            Set(vset) => Some(vset),
            _ => None,
        }
    }

    /// The record's label and fields, if the value is a record.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::{Symbol, Syrup};
    ///
    /// let rec = Syrup::record(Symbol::from("point"), vec![Syrup::from(3), Syrup::from(4)]);
    /// let (label, fields) = rec.to_rec().unwrap();
    ///
    /// assert_eq!(label.as_sym(), Some("point"));
    /// assert_eq!(fields.len(), 2);
    /// ```
    pub fn to_rec(&self) -> Option<(&Syrup, &[Syrup])> {
        match self {
            Rec(label, fields) => Some((label, fields)),
            _ => None,
        }
    }

    /// Consumes a `Syrup` value, converting it to a value of type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use syrup::rep::*;
    ///
    /// let ks_num = 1.to_syrup();
    ///
    /// let num: u8 = ks_num.into_rep().unwrap();
    /// assert_eq!(num, 1);
    /// ```
    pub fn into_rep<T: SyrupRep>(self) -> Option<T> { T::from_syrup(self).ok() }

    /// Converts a bytestring literal to `Syrup`.
    ///
    /// # Example
    /// ```
    /// use syrup::Syrup;
    ///
    /// let foo = Syrup::from_static(b"this is an example");
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Syrup { Byt(Bytes::from_static(bytes)) }
}

impl<T: Into<Syrup>> From<Vec<T>> for Syrup {
    fn from(v: Vec<T>) -> Syrup { Seq(v.into_iter().map(T::into).collect()) }
}

macro_rules! try_from_ctor {
    ($from:ty, $to:ty, $ctor:tt) => {
        impl TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(from: $from) -> Result<$to, $from> {
                match from {
                    $ctor(a) => Ok(a),
                    f => Err(f),
                }
            }
        }
    };
}

from_fn!(Syrup, bool, Bool);
try_from_ctor!(Syrup, bool, Bool);
from_fn!(Syrup, Inum, Num);
try_from_ctor!(Syrup, Inum, Num);
from_fn!(Syrup, Float, Flt);
try_from_ctor!(Syrup, Float, Flt);
from_fn!(Syrup, Bytes, Byt);
try_from_ctor!(Syrup, Bytes, Byt);
from_fn!(Syrup, String, Str);
from_fn!(Syrup, &str, |s: &str| Str(s.to_string()));
from_fn!(Syrup, Symbol, |s: Symbol| Sym(s.0));

try_from_ctor!(Syrup, String, Str);
try_from_ctor!(Syrup, Vec<Syrup>, Seq);
try_from_ctor!(Syrup, VecMap<Syrup, Syrup>, Map);
try_from_ctor!(Syrup, VecSet<Syrup>, Set);

impl TryFrom<Syrup> for Symbol {
    type Error = Syrup;

    fn try_from(from: Syrup) -> Result<Symbol, Syrup> {
        match from {
            Sym(s) => Ok(Symbol(s)),
            f => Err(f),
        }
    }
}

impl From<VecMap<Syrup, Syrup>> for Syrup {
    fn from(v: VecMap<Syrup, Syrup>) -> Syrup { Map(v) }
}

impl From<VecSet<Syrup>> for Syrup {
    fn from(v: VecSet<Syrup>) -> Syrup { Set(v) }
}

compose_from!(Syrup, Inum, BigInt);
compose_from!(Syrup, Inum, i64);
compose_from!(Syrup, Inum, u64);
compose_from!(Syrup, Inum, i128);
compose_from!(Syrup, Inum, u128);
compose_from!(Syrup, Inum, usize);
compose_from!(Syrup, Inum, isize);
compose_from!(Syrup, Float, f32);
compose_from!(Syrup, Float, f64);

from_prims!(Syrup);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rep::SyrupRep;

    #[test]
    fn trivial_tests() {
        assert!(5.to_syrup().to_inum().is_some());

        assert!(true.to_syrup().to_bool().unwrap());

        assert_eq!(
            Bytes::from("word").to_syrup().to_bytes().unwrap(),
            &Bytes::from("word")
        );

        assert_eq!(Syrup::from("hi").as_str(), Some("hi"));
        assert_eq!(Syrup::from(Symbol::from("hi")).as_sym(), Some("hi"));
    }

    #[test]
    fn from_vec() {
        let v = vec![0, 1, 2, 3, 4];
        let k_val = Syrup::from(v.clone());
        assert_eq!(k_val.into_rep(), Some(v));
    }

    #[test]
    fn record_accessor() {
        let rec = Syrup::record(Symbol::from("label"), vec![Syrup::from(1)]);
        let (label, fields) = rec.to_rec().unwrap();
        assert_eq!(label.as_sym(), Some("label"));
        assert_eq!(fields, &[Syrup::from(1)]);
    }
}
