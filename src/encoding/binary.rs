//! Stateless emitters for the binary format.
//!
//! Atoms are a tag byte, an unsigned LEB128 length where one is called for,
//! and the payload; collections are a tag byte and a closing end marker.

use super::{constants::*, ser::SerializerBytes};
use crate::{
    inum::Inum,
    util::{i64_to_signed_digits, u64_to_uleb128},
};

/// `0x81` or `0x80`.
pub fn put_bool<S: SerializerBytes>(out: &mut S, b: bool) {
    out.put_byte(if b { TAG_TRUE } else { TAG_FALSE })
}

/// Tag, LEB128 byte count, then the shortest two's-complement big-endian
/// digits. Zero has no digits at all.
pub fn put_int<S: SerializerBytes>(out: &mut S, i: &Inum) {
    out.put_byte(TAG_INT);
    match i {
        Inum::I64(v) => {
            let digs = i64_to_signed_digits(*v);
            out.put_slice(&u64_to_uleb128(digs.len() as u64));
            out.put_slice(&digs);
        }
        Inum::Int(v) => {
            // the big branch is never zero, so the digits are never empty
            let digs = v.to_signed_bytes_be();
            out.put_slice(&u64_to_uleb128(digs.len() as u64));
            out.put_slice(&digs);
        }
    }
}

/// Tag, LEB128 length 4, then the bit-pattern bytes, big-endian.
pub fn put_float<S: SerializerBytes>(out: &mut S, bits: u32) {
    out.put_byte(TAG_IEEE754);
    out.put_byte(4);
    out.put_slice(&bits.to_be_bytes());
}

/// Tag, LEB128 length 8, then the bit-pattern bytes, big-endian.
pub fn put_double<S: SerializerBytes>(out: &mut S, bits: u64) {
    out.put_byte(TAG_IEEE754);
    out.put_byte(8);
    out.put_slice(&bits.to_be_bytes());
}

fn put_len_prefixed<S: SerializerBytes>(out: &mut S, tag: u8, payload: &[u8]) {
    out.put_byte(tag);
    out.put_slice(&u64_to_uleb128(payload.len() as u64));
    out.put_slice(payload);
}

/// Bytestring atom.
pub fn put_bytes<S: SerializerBytes>(out: &mut S, b: &[u8]) {
    put_len_prefixed(out, TAG_BYTES, b)
}

/// String atom.
pub fn put_string<S: SerializerBytes>(out: &mut S, s: &str) {
    put_len_prefixed(out, TAG_STRING, s.as_bytes())
}

/// Symbol atom.
pub fn put_symbol<S: SerializerBytes>(out: &mut S, s: &str) {
    put_len_prefixed(out, TAG_SYMBOL, s.as_bytes())
}

/// Opens a dictionary.
pub fn begin_dictionary<S: SerializerBytes>(out: &mut S) { out.put_byte(TAG_DICTIONARY) }

/// Opens a sequence.
pub fn begin_sequence<S: SerializerBytes>(out: &mut S) { out.put_byte(TAG_SEQUENCE) }

/// Opens a record.
pub fn begin_record<S: SerializerBytes>(out: &mut S) { out.put_byte(TAG_RECORD) }

/// Opens a set.
pub fn begin_set<S: SerializerBytes>(out: &mut S) { out.put_byte(TAG_SET) }

/// Closes any collection.
pub fn end<S: SerializerBytes>(out: &mut S) { out.put_byte(TAG_END) }
