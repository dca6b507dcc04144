//! Tree decoding for the binary format.
//!
//! Reads one complete value out of a [`Buf`] into a [`Syrup`] tree.
//! Collections are delimited by the end marker rather than a count, so
//! decoding recurses per element until the marker shows up.

use super::constants::*;
use crate::{
    errors::Error,
    float::Float,
    inum::Inum,
    vecmap::VecMap,
    vecset::VecSet,
    Syrup,
};
use bytes::{Buf, Bytes};
use num_bigint::BigInt;
use std::convert::TryFrom;

fn read_u8<B: Buf>(data: &mut B) -> Result<u8, Error> {
    if data.has_remaining() {
        Ok(data.get_u8())
    } else {
        Err(Error::UnexpectedEndOfInput)
    }
}

/// Read a specific number of bytes from a buffer.
fn read_many<B: Buf>(data: &mut B, num_bytes: usize) -> Result<Vec<u8>, Error> {
    if data.remaining() >= num_bytes {
        let mut bts = vec![0; num_bytes];
        data.copy_to_slice(&mut bts);
        Ok(bts)
    } else {
        Err(Error::UnexpectedEndOfInput)
    }
}

/// Read an unsigned LEB128 length.
fn read_uleb<B: Buf>(data: &mut B) -> Result<u64, Error> {
    let mut out = 0u64;
    let mut shift = 0u32;
    loop {
        let byte = read_u8(data)?;
        let bits = u64::from(byte & 0x7F);
        if shift >= 64 || (64 - shift < 7 && bits >> (64 - shift) != 0) {
            return Err(Error::Overflow);
        }
        out |= bits << shift;
        if byte & 0x80 == 0 {
            return Ok(out);
        }
        shift += 7;
    }
}

fn read_len<B: Buf>(data: &mut B) -> Result<usize, Error> {
    usize::try_from(read_uleb(data)?).map_err(|_| Error::Overflow)
}

/// Sign-extends big-endian two's-complement digits that fit in an `i64`.
fn small_int(digs: &[u8]) -> i64 {
    debug_assert!(!digs.is_empty() && digs.len() <= 8);
    let mut val = i64::from(digs[0] as i8);
    for b in &digs[1..] {
        val = val << 8 | i64::from(*b);
    }
    val
}

fn read_utf8<B: Buf>(data: &mut B, len: usize) -> Result<String, Error> {
    String::from_utf8(read_many(data, len)?).map_err(|_| Error::InvalidUtf8)
}

/// Tries to decode one binary-encoded value from a buffer.
///
/// # Example
///
/// ```
/// use syrup::prelude::*;
///
/// let enc = encode_binary_full(&Syrup::from(true));
/// let dec = decode_binary(&mut enc.as_slice()).unwrap();
///
/// assert_eq!(dec, Syrup::from(true));
/// ```
pub fn decode<B: Buf>(data: &mut B) -> Result<Syrup, Error> {
    let tag = read_u8(data)?;
    decode_tagged(tag, data)
}

fn decode_tagged<B: Buf>(tag: u8, data: &mut B) -> Result<Syrup, Error> {
    match tag {
        TAG_FALSE => Ok(Syrup::Bool(false)),
        TAG_TRUE => Ok(Syrup::Bool(true)),
        TAG_IEEE754 => {
            match read_uleb(data)? {
                4 => {
                    let digs = read_many(data, 4)?;
                    let mut bits = [0; 4];
                    bits.copy_from_slice(&digs);
                    Ok(Syrup::Flt(Float::Single(u32::from_be_bytes(bits))))
                }
                8 => {
                    let digs = read_many(data, 8)?;
                    let mut bits = [0; 8];
                    bits.copy_from_slice(&digs);
                    Ok(Syrup::Flt(Float::Double(u64::from_be_bytes(bits))))
                }
                _ => Err(Error::Syntax),
            }
        }
        TAG_INT => {
            let len = read_len(data)?;
            let digs = read_many(data, len)?;
            if digs.is_empty() {
                Ok(Syrup::Num(Inum::I64(0)))
            } else if digs.len() <= 8 {
                Ok(Syrup::Num(Inum::from(small_int(&digs))))
            } else {
                Ok(Syrup::Num(Inum::from(BigInt::from_signed_bytes_be(&digs))))
            }
        }
        TAG_STRING => {
            let len = read_len(data)?;
            read_utf8(data, len).map(Syrup::Str)
        }
        TAG_SYMBOL => {
            let len = read_len(data)?;
            read_utf8(data, len).map(Syrup::Sym)
        }
        TAG_BYTES => {
            let len = read_len(data)?;
            read_many(data, len).map(Bytes::from).map(Syrup::Byt)
        }
        TAG_RECORD => {
            let label = match read_u8(data)? {
                // a record without a label is not a record
                TAG_END => return Err(Error::Syntax),
                t => decode_tagged(t, data)?,
            };
            let mut fields = Vec::new();
            loop {
                match read_u8(data)? {
                    TAG_END => break,
                    t => fields.push(decode_tagged(t, data)?),
                }
            }
            Ok(Syrup::Rec(Box::new(label), fields))
        }
        TAG_SEQUENCE => {
            let mut out = Vec::new();
            loop {
                match read_u8(data)? {
                    TAG_END => break,
                    t => out.push(decode_tagged(t, data)?),
                }
            }
            Ok(Syrup::Seq(out))
        }
        TAG_SET => {
            let mut out = Vec::new();
            loop {
                match read_u8(data)? {
                    TAG_END => break,
                    t => out.push(decode_tagged(t, data)?),
                }
            }
            Ok(Syrup::Set(VecSet::from(out)))
        }
        TAG_DICTIONARY => {
            let mut out = Vec::new();
            loop {
                match read_u8(data)? {
                    TAG_END => break,
                    t => {
                        let key = decode_tagged(t, data)?;
                        let val = decode(data)?;
                        out.push((key, val));
                    }
                }
            }
            // non-canonical key order is accepted; duplicates collapse to
            // the first entry when the map is built
            Ok(Syrup::Map(VecMap::from(out)))
        }
        TAG_ANNOTATION | TAG_EMBEDDED => Err(Error::Syntax),
        _ => Err(Error::Syntax),
    }
}

/// Decodes a byte slice holding one binary-encoded value.
///
/// # Example
///
/// ```
/// use syrup::prelude::*;
///
/// let enc = encode_binary_full(&Syrup::from(17));
///
/// let dec = decode_binary_full(&enc).unwrap();
/// assert_eq!(dec, Syrup::from(17));
/// ```
pub fn decode_full(bs: &[u8]) -> Result<Syrup, Error> {
    let mut data = bs;
    decode(&mut data)
}
