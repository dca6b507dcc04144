//! Stateless emitters for the text format.
//!
//! Each function writes one atom or one collection delimiter; composing
//! them into well-formed documents is the writer's job.

use super::ser::SerializerBytes;
use crate::inum::Inum;

/// `t` or `f`.
pub fn put_bool<S: SerializerBytes>(out: &mut S, b: bool) {
    out.put_byte(if b { b't' } else { b'f' })
}

/// Decimal magnitude, then the sign byte. Zero is `0+`.
pub fn put_int<S: SerializerBytes>(out: &mut S, i: &Inum) {
    match i {
        Inum::I64(v) => out.put_slice(v.unsigned_abs().to_string().as_bytes()),
        Inum::Int(v) => out.put_slice(v.magnitude().to_str_radix(10).as_bytes()),
    }
    out.put_byte(if i.is_negative() { b'-' } else { b'+' });
}

/// `F`, then the four bit-pattern bytes, big-endian.
pub fn put_float<S: SerializerBytes>(out: &mut S, bits: u32) {
    out.put_byte(b'F');
    out.put_slice(&bits.to_be_bytes());
}

/// `D`, then the eight bit-pattern bytes, big-endian.
pub fn put_double<S: SerializerBytes>(out: &mut S, bits: u64) {
    out.put_byte(b'D');
    out.put_slice(&bits.to_be_bytes());
}

fn put_len_prefixed<S: SerializerBytes>(out: &mut S, marker: u8, payload: &[u8]) {
    out.put_slice(payload.len().to_string().as_bytes());
    out.put_byte(marker);
    out.put_slice(payload);
}

/// Decimal length, `:`, then the raw payload.
pub fn put_bytes<S: SerializerBytes>(out: &mut S, b: &[u8]) { put_len_prefixed(out, b':', b) }

/// Decimal length, `"`, then the UTF-8 payload.
pub fn put_string<S: SerializerBytes>(out: &mut S, s: &str) {
    put_len_prefixed(out, b'"', s.as_bytes())
}

/// Decimal length, `'`, then the UTF-8 payload.
pub fn put_symbol<S: SerializerBytes>(out: &mut S, s: &str) {
    put_len_prefixed(out, b'\'', s.as_bytes())
}

/// `{`
pub fn begin_dictionary<S: SerializerBytes>(out: &mut S) { out.put_byte(b'{') }

/// `}`
pub fn end_dictionary<S: SerializerBytes>(out: &mut S) { out.put_byte(b'}') }

/// `[`
pub fn begin_sequence<S: SerializerBytes>(out: &mut S) { out.put_byte(b'[') }

/// `]`
pub fn end_sequence<S: SerializerBytes>(out: &mut S) { out.put_byte(b']') }

/// `<`
pub fn begin_record<S: SerializerBytes>(out: &mut S) { out.put_byte(b'<') }

/// `>`
pub fn end_record<S: SerializerBytes>(out: &mut S) { out.put_byte(b'>') }

/// `#`
pub fn begin_set<S: SerializerBytes>(out: &mut S) { out.put_byte(b'#') }

/// `$`
pub fn end_set<S: SerializerBytes>(out: &mut S) { out.put_byte(b'$') }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_atoms() {
        let out = &mut Vec::new();
        put_int(out, &Inum::from(1923));
        put_int(out, &Inum::from(-43));
        put_int(out, &Inum::from(0));
        assert_eq!(out.as_slice(), b"1923+43-0+");
    }

    #[test]
    fn int_atom_min_i64() {
        let out = &mut Vec::new();
        put_int(out, &Inum::from(i64::min_value()));
        assert_eq!(out.as_slice(), b"9223372036854775808-");
    }

    #[test]
    fn length_prefixed_atoms() {
        let out = &mut Vec::new();
        put_bytes(out, b"ab");
        put_string(out, "Hello");
        put_symbol(out, "p1");
        assert_eq!(out.as_slice(), b"2:ab5\"Hello2'p1".as_ref());
    }

    #[test]
    fn float_atoms() {
        let out = &mut Vec::new();
        put_float(out, 1.0f32.to_bits());
        assert_eq!(out.as_slice(), b"F\x3F\x80\x00\x00");

        let out = &mut Vec::new();
        put_double(out, 1.0f64.to_bits());
        assert_eq!(out.as_slice(), b"D\x3F\xF0\x00\x00\x00\x00\x00\x00");
    }
}
