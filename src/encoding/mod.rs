//! # Encoders and decoders
//!
//! One value model, two wire formats. Writing goes through [`Ser`] and a
//! format-specific [`Serializer`]; text reading streams through the
//! scanner-driven [`parse`], and binary reading walks a buffer with
//! [`decode_binary`].
//!
//! # Example
//!
//! ```
//! use syrup::prelude::*;
//!
//! // a struct that will store some data
//! #[derive(Ser, Decode, PartialEq, Debug, Clone)]
//! struct SomeData {
//!     x: u64,
//!     y: i32,
//! }
//!
//! // here it is storing some data
//! let some_data = SomeData { x: 1, y: -2 };
//!
//! // encoded as text, with the fields in canonical order
//! let enc = encode_text_full(&some_data);
//! assert_eq!(enc, b"{1'x1+1'y2-}".to_vec());
//!
//! // and parsed back, streaming
//! let dec: SomeData = parse(enc.as_slice()).unwrap();
//! assert_eq!(dec, some_data);
//!
//! // the binary encoding round-trips through the value tree
//! let tree = decode_binary_full(&encode_binary_full(&some_data)).unwrap();
//! assert_eq!(tree.to_map().unwrap().len(), 2);
//! ```

/// Stateless emitters for the binary format.
pub mod binary;
mod constants;
/// Tree decoding for the binary format.
pub mod de;
/// Typed, resumable reading of the text format.
pub mod plan;
/// The composing writer.
pub mod ser;
/// Stateless emitters for the text format.
pub mod text;

pub use de::{decode as decode_binary, decode_full as decode_binary_full};
pub use plan::{
    parse, parse_with_capacity, Decode, Plan, Step, StructState, DEFAULT_BUFFER_SIZE,
};
pub use ser::*;

use std::io;

/// Encode a value into the text format, appending to `out`.
///
/// # Example
///
/// ```
/// use syrup::prelude::*;
///
/// let out = &mut Vec::new();
/// encode_text(&true, out);
/// assert_eq!(out.as_slice(), b"t");
/// ```
pub fn encode_text<T: Ser + ?Sized, S: SerializerBytes>(t: &T, out: &mut S) {
    t.ser(&mut TextSerializer::new(out))
}

/// Encode a value into the text format, returning the bytes.
pub fn encode_text_full<T: Ser + ?Sized>(t: &T) -> Vec<u8> {
    let mut out = Vec::new();
    encode_text(t, &mut out);
    out
}

/// Encode a value into the binary format, appending to `out`.
pub fn encode_binary<T: Ser + ?Sized, S: SerializerBytes>(t: &T, out: &mut S) {
    t.ser(&mut BinarySerializer::new(out))
}

/// Encode a value into the binary format, returning the bytes.
///
/// # Example
///
/// ```
/// use syrup::prelude::*;
///
/// assert_eq!(encode_binary_full(&false), vec![0x80]);
/// ```
pub fn encode_binary_full<T: Ser + ?Sized>(t: &T) -> Vec<u8> {
    let mut out = Vec::new();
    encode_binary(t, &mut out);
    out
}

/// Encode a value into the text format and write it to an [`io::Write`]
/// sink. Sink errors propagate.
pub fn write_text<W: io::Write, T: Ser + ?Sized>(w: &mut W, t: &T) -> io::Result<()> {
    w.write_all(&encode_text_full(t))
}

/// Encode a value into the binary format and write it to an [`io::Write`]
/// sink. Sink errors propagate.
pub fn write_binary<W: io::Write, T: Ser + ?Sized>(w: &mut W, t: &T) -> io::Result<()> {
    w.write_all(&encode_binary_full(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vecmap::VecMap, vecset::VecSet, Symbol, Syrup};

    fn sample() -> Syrup {
        let map: VecMap<Syrup, Syrup> = vec![
            (Syrup::from(Symbol::from("seq")), Syrup::from(vec![1, 2, 3])),
            (
                Syrup::from(Symbol::from("set")),
                Syrup::from((0..5).map(Syrup::from).collect::<VecSet<_>>()),
            ),
            (Syrup::from(Symbol::from("str")), Syrup::from("text")),
            (
                Syrup::from(Symbol::from("bytes")),
                Syrup::from_static(&[0xFF, 0x00]),
            ),
            (Syrup::from(Symbol::from("float")), Syrup::from(1.5f64)),
        ]
        .into();
        Syrup::record(Symbol::from("sample"), vec![Syrup::from(map)])
    }

    #[test]
    fn binary_round_trip() {
        let v = sample();
        let enc = encode_binary_full(&v);
        assert_eq!(decode_binary_full(&enc).unwrap(), v);
    }

    #[test]
    fn text_round_trip() {
        let v = sample();
        let enc = encode_text_full(&v);
        let dec: Syrup = parse(enc.as_slice()).unwrap();
        assert_eq!(dec, v);
    }

    #[test]
    fn encodings_are_stable_across_reencoding() {
        let v = sample();
        let text = encode_text_full(&v);
        let reparsed: Syrup = parse(text.as_slice()).unwrap();
        assert_eq!(encode_text_full(&reparsed), text);

        let bin = encode_binary_full(&v);
        let redecoded = decode_binary_full(&bin).unwrap();
        assert_eq!(encode_binary_full(&redecoded), bin);
    }

    #[test]
    fn write_into_io_sinks() {
        let mut out = Vec::new();
        write_text(&mut out, &true).unwrap();
        write_binary(&mut out, &false).unwrap();
        assert_eq!(out, vec![b't', 0x80]);
    }
}
