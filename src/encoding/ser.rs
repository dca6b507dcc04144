//! The composing writer: a schema-driven layer over either stateless
//! encoder. Host values describe their shape through [`Ser`]; the
//! [`Serializer`] turns shapes into atoms and collections and enforces the
//! canonical ordering rules for dictionaries and sets.
//!
//! A manual `impl Ser` is the escape hatch for custom encodings: it
//! overrides every default shape rule.

use super::{binary, text};
use crate::{
    float::Float,
    inum::Inum,
    vecmap::VecMap,
    vecset::VecSet,
    Bytes, Symbol, Syrup,
};
use bytes::BytesMut;
use hashbrown::HashMap;
use num_bigint::BigInt;
use std::hash::{BuildHasher, Hash};

/// Byte-oriented sink.
pub trait SerializerBytes {
    /// Add a byte to the output value.
    fn put_byte(&mut self, u: u8);

    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]) {
        for b in slice {
            self.put_byte(*b)
        }
    }
}

impl SerializerBytes for Vec<u8> {
    fn put_byte(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }
}

impl SerializerBytes for BytesMut {
    fn put_byte(&mut self, u: u8) { self.extend_from_slice(&[u]) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }
}

/// A format-specific writer.
///
/// Collections follow a start/put/finalize protocol with a per-impl state
/// value. Dictionaries and sets buffer their entries in encoded form and
/// sort them at finalization, so output is canonical no matter how the host
/// value orders its members.
pub trait Serializer: Sized {
    type SeqState;
    type RecState;
    type SetState;
    type MapState;

    /// Add a boolean atom.
    fn put_bool(&mut self, b: bool);

    /// Add an integer atom.
    fn put_inum(&mut self, i: &Inum);

    /// Add an integer atom from an `i64`.
    #[inline]
    fn put_i64(&mut self, i: i64) { self.put_inum(&Inum::from(i)) }

    /// Add an integer atom from a `BigInt`.
    fn put_bigint(&mut self, i: &BigInt) { self.put_inum(&Inum::from(i.clone())) }

    /// Add a single-precision float atom.
    fn put_float(&mut self, f: f32);

    /// Add a double-precision float atom.
    fn put_double(&mut self, f: f64);

    /// Add a bytestring atom.
    fn put_bytes(&mut self, b: &[u8]);

    /// Add a string atom. The payload is UTF-8 by construction of `&str`.
    fn put_string(&mut self, s: &str);

    /// Add a symbol atom.
    fn put_symbol(&mut self, s: &str);

    /// Add an arbitrary [`Syrup`] tree.
    #[inline]
    fn put_value(&mut self, v: &Syrup) { ser_syrup(self, v) }

    fn seq_start(&mut self, len: usize) -> Self::SeqState;
    fn seq_put<T: Ser + ?Sized>(&mut self, s: &mut Self::SeqState, t: &T);
    fn seq_finalize(&mut self, s: Self::SeqState);

    /// Opens a record and writes its label.
    fn rec_start<L: Ser + ?Sized>(&mut self, label: &L) -> Self::RecState;
    fn rec_put<T: Ser + ?Sized>(&mut self, s: &mut Self::RecState, t: &T);
    fn rec_finalize(&mut self, s: Self::RecState);

    fn set_start(&mut self, len: usize) -> Self::SetState;
    fn set_put<T: Ser + ?Sized>(&mut self, s: &mut Self::SetState, t: &T);
    fn set_finalize(&mut self, s: Self::SetState);

    fn map_start(&mut self, len: usize) -> Self::MapState;
    fn map_put<K: Ser + ?Sized, V: Ser + ?Sized>(
        &mut self,
        s: &mut Self::MapState,
        key: &K,
        val: &V,
    );
    fn map_finalize(&mut self, s: Self::MapState);
}

/// Serialize an arbitrary [`Syrup`] tree.
pub fn ser_syrup<S: Serializer>(s: &mut S, k: &Syrup) {
    match k {
        Syrup::Bool(b) => s.put_bool(*b),
        Syrup::Num(i) => s.put_inum(i),
        Syrup::Flt(Float::Single(bits)) => s.put_float(f32::from_bits(*bits)),
        Syrup::Flt(Float::Double(bits)) => s.put_double(f64::from_bits(*bits)),
        Syrup::Byt(bs) => s.put_bytes(bs),
        Syrup::Str(st) => s.put_string(st),
        Syrup::Sym(sy) => s.put_symbol(sy),
        Syrup::Seq(a) => {
            let mut b = s.seq_start(a.len());
            for v in a {
                s.seq_put(&mut b, v);
            }
            s.seq_finalize(b);
        }
        Syrup::Set(m) => {
            let mut b = s.set_start(m.len());
            for v in m.iter() {
                s.set_put(&mut b, v);
            }
            s.set_finalize(b);
        }
        Syrup::Map(m) => {
            let mut b = s.map_start(m.len());
            for (k, v) in m.iter() {
                s.map_put(&mut b, k, v);
            }
            s.map_finalize(b);
        }
        Syrup::Rec(label, fields) => {
            let mut b = s.rec_start(label.as_ref());
            for v in fields {
                s.rec_put(&mut b, v);
            }
            s.rec_finalize(b);
        }
    }
}

/// Writes the text format into a [`SerializerBytes`] sink.
pub struct TextSerializer<'o, S: SerializerBytes> {
    out: &'o mut S,
}

impl<'o, S: SerializerBytes> TextSerializer<'o, S> {
    pub fn new(out: &'o mut S) -> Self { TextSerializer { out } }
}

/// Writes the binary format into a [`SerializerBytes`] sink.
pub struct BinarySerializer<'o, S: SerializerBytes> {
    out: &'o mut S,
}

impl<'o, S: SerializerBytes> BinarySerializer<'o, S> {
    pub fn new(out: &'o mut S) -> Self { BinarySerializer { out } }
}

/// Encodes `t` on its own into a scratch buffer, for canonical sorting.
macro_rules! scratch {
    ($ser:tt, $t:expr) => {{
        let mut tmp = Vec::new();
        $t.ser(&mut $ser::new(&mut tmp));
        tmp
    }};
}

impl<'o, S: SerializerBytes> Serializer for TextSerializer<'o, S> {
    type MapState = Vec<(Vec<u8>, Vec<u8>)>;
    type RecState = ();
    type SeqState = ();
    type SetState = Vec<Vec<u8>>;

    fn put_bool(&mut self, b: bool) { text::put_bool(self.out, b) }

    fn put_inum(&mut self, i: &Inum) { text::put_int(self.out, i) }

    fn put_float(&mut self, f: f32) { text::put_float(self.out, f.to_bits()) }

    fn put_double(&mut self, f: f64) { text::put_double(self.out, f.to_bits()) }

    fn put_bytes(&mut self, b: &[u8]) { text::put_bytes(self.out, b) }

    fn put_string(&mut self, s: &str) { text::put_string(self.out, s) }

    fn put_symbol(&mut self, s: &str) { text::put_symbol(self.out, s) }

    fn seq_start(&mut self, _len: usize) { text::begin_sequence(self.out) }

    fn seq_put<T: Ser + ?Sized>(&mut self, _: &mut (), t: &T) { t.ser(self) }

    fn seq_finalize(&mut self, _: ()) { text::end_sequence(self.out) }

    fn rec_start<L: Ser + ?Sized>(&mut self, label: &L) {
        text::begin_record(self.out);
        label.ser(self);
    }

    fn rec_put<T: Ser + ?Sized>(&mut self, _: &mut (), t: &T) { t.ser(self) }

    fn rec_finalize(&mut self, _: ()) { text::end_record(self.out) }

    fn set_start(&mut self, len: usize) -> Vec<Vec<u8>> {
        text::begin_set(self.out);
        Vec::with_capacity(len)
    }

    fn set_put<T: Ser + ?Sized>(&mut self, s: &mut Vec<Vec<u8>>, t: &T) {
        s.push(scratch!(TextSerializer, t));
    }

    fn set_finalize(&mut self, mut s: Vec<Vec<u8>>) {
        // lexicographic byte order; shorter wins on equal prefix
        s.sort_unstable();
        for member in s {
            self.out.put_slice(&member);
        }
        text::end_set(self.out);
    }

    fn map_start(&mut self, len: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
        text::begin_dictionary(self.out);
        Vec::with_capacity(len)
    }

    fn map_put<K: Ser + ?Sized, V: Ser + ?Sized>(
        &mut self,
        s: &mut Vec<(Vec<u8>, Vec<u8>)>,
        key: &K,
        val: &V,
    ) {
        s.push((scratch!(TextSerializer, key), scratch!(TextSerializer, val)));
    }

    fn map_finalize(&mut self, mut s: Vec<(Vec<u8>, Vec<u8>)>) {
        s.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        for (k, v) in s {
            self.out.put_slice(&k);
            self.out.put_slice(&v);
        }
        text::end_dictionary(self.out);
    }
}

impl<'o, S: SerializerBytes> Serializer for BinarySerializer<'o, S> {
    type MapState = Vec<(Vec<u8>, Vec<u8>)>;
    type RecState = ();
    type SeqState = ();
    type SetState = Vec<Vec<u8>>;

    fn put_bool(&mut self, b: bool) { binary::put_bool(self.out, b) }

    fn put_inum(&mut self, i: &Inum) { binary::put_int(self.out, i) }

    fn put_float(&mut self, f: f32) { binary::put_float(self.out, f.to_bits()) }

    fn put_double(&mut self, f: f64) { binary::put_double(self.out, f.to_bits()) }

    fn put_bytes(&mut self, b: &[u8]) { binary::put_bytes(self.out, b) }

    fn put_string(&mut self, s: &str) { binary::put_string(self.out, s) }

    fn put_symbol(&mut self, s: &str) { binary::put_symbol(self.out, s) }

    fn seq_start(&mut self, _len: usize) { binary::begin_sequence(self.out) }

    fn seq_put<T: Ser + ?Sized>(&mut self, _: &mut (), t: &T) { t.ser(self) }

    fn seq_finalize(&mut self, _: ()) { binary::end(self.out) }

    fn rec_start<L: Ser + ?Sized>(&mut self, label: &L) {
        binary::begin_record(self.out);
        label.ser(self);
    }

    fn rec_put<T: Ser + ?Sized>(&mut self, _: &mut (), t: &T) { t.ser(self) }

    fn rec_finalize(&mut self, _: ()) { binary::end(self.out) }

    fn set_start(&mut self, len: usize) -> Vec<Vec<u8>> {
        binary::begin_set(self.out);
        Vec::with_capacity(len)
    }

    fn set_put<T: Ser + ?Sized>(&mut self, s: &mut Vec<Vec<u8>>, t: &T) {
        s.push(scratch!(BinarySerializer, t));
    }

    fn set_finalize(&mut self, mut s: Vec<Vec<u8>>) {
        s.sort_unstable();
        for member in s {
            self.out.put_slice(&member);
        }
        binary::end(self.out);
    }

    fn map_start(&mut self, len: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
        binary::begin_dictionary(self.out);
        Vec::with_capacity(len)
    }

    fn map_put<K: Ser + ?Sized, V: Ser + ?Sized>(
        &mut self,
        s: &mut Vec<(Vec<u8>, Vec<u8>)>,
        key: &K,
        val: &V,
    ) {
        s.push((
            scratch!(BinarySerializer, key),
            scratch!(BinarySerializer, val),
        ));
    }

    fn map_finalize(&mut self, mut s: Vec<(Vec<u8>, Vec<u8>)>) {
        s.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        for (k, v) in s {
            self.out.put_slice(&k);
            self.out.put_slice(&v);
        }
        binary::end(self.out);
    }
}

/// A value that can be serialized.
pub trait Ser {
    /// Serializes the value.
    fn ser<S: Serializer>(&self, s: &mut S);
}

// Syrup
impl Ser for Syrup {
    fn ser<S: Serializer>(&self, s: &mut S) { ser_syrup(s, self) }
}

// Bytes
impl Ser for Bytes {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_bytes(self) }
}

// BigInt
impl Ser for BigInt {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_bigint(self) }
}

// Inum
impl Ser for Inum {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_inum(self) }
}

macro_rules! int_ser {
    ($typ:ty) => {
        impl Ser for $typ {
            #[inline]
            fn ser<S: Serializer>(&self, s: &mut S) { s.put_inum(&Inum::from(*self)) }
        }
    };
}

// sizes
int_ser!(usize);
int_ser!(isize);

// 8-bit ints
int_ser!(u8);
int_ser!(i8);

// 16-bit ints
int_ser!(u16);
int_ser!(i16);

// 32-bit ints
int_ser!(u32);
int_ser!(i32);

// 64-bit ints
int_ser!(u64);
int_ser!(i64);

// 128-bit ints
int_ser!(u128);
int_ser!(i128);

// floats
impl Ser for f32 {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_float(*self) }
}

impl Ser for f64 {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_double(*self) }
}

// boolean
impl Ser for bool {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_bool(*self) }
}

// Strings
impl Ser for str {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_string(self) }
}

impl Ser for String {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_string(self) }
}

// chars
impl Ser for char {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut buf = [0; 4];
        s.put_string(self.encode_utf8(&mut buf))
    }
}

// Symbols
impl Ser for Symbol {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_symbol(&self.0) }
}

/// A borrowed symbol, for callers that have a name but no [`Symbol`] value.
/// Field names in derived impls serialize through this.
pub struct SymbolStr<'a>(pub &'a str);

impl<'a> Ser for SymbolStr<'a> {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_symbol(self.0) }
}

/// `None` encodes as a plain `false`; `Some(v)` encodes as `v` itself, so
/// `Some(true)` has no encoding of its own.
impl<T: Ser> Ser for Option<T> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        match self {
            None => s.put_bool(false),
            Some(t) => t.ser(s),
        }
    }
}

impl<T: Ser + ?Sized> Ser for Box<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { T::ser(self, s) }
}

impl<T: Ser> Ser for [T] {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut b = s.seq_start(self.len());
        for t in self {
            s.seq_put(&mut b, t);
        }
        s.seq_finalize(b);
    }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { self.as_slice().ser(s) }
}

impl<K: Ser + Ord, V: Ser> Ser for VecMap<K, V> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut b = s.map_start(self.len());
        for (k, v) in self.iter() {
            s.map_put(&mut b, k, v);
        }
        s.map_finalize(b);
    }
}

impl<K: Ser + Eq + Hash, V: Ser, H: BuildHasher> Ser for HashMap<K, V, H> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut b = s.map_start(self.len());
        for (k, v) in self.iter() {
            s.map_put(&mut b, k, v);
        }
        s.map_finalize(b);
    }
}

impl<T: Ser + Ord> Ser for VecSet<T> {
    fn ser<S: Serializer>(&self, s: &mut S) {
        let mut b = s.set_start(self.len());
        for t in self.iter() {
            s.set_put(&mut b, t);
        }
        s.set_finalize(b);
    }
}

macro_rules! tuple_ser {
    ($len:expr, $($typ:ident),*) => {
        impl<$($typ: Ser),*> Ser for ($($typ,)*) {
            #[allow(non_snake_case)]
            #[inline]
            fn ser<Se: Serializer>(&self, s: &mut Se) {
                let mut state = s.seq_start($len);
                let ($($typ,)*) = self;
                $(s.seq_put(&mut state, $typ);)*
                s.seq_finalize(state);
            }
        }
    };
}

tuple_ser!(1, A);
tuple_ser!(2, A, B);
tuple_ser!(3, A, B, C);
tuple_ser!(4, A, B, C, D);
tuple_ser!(5, A, B, C, D, E);
tuple_ser!(6, A, B, C, D, E, F);
tuple_ser!(7, A, B, C, D, E, F, G);
tuple_ser!(8, A, B, C, D, E, F, G, H);
tuple_ser!(9, A, B, C, D, E, F, G, H, I);
tuple_ser!(10, A, B, C, D, E, F, G, H, I, J);
tuple_ser!(11, A, B, C, D, E, F, G, H, I, J, K);
tuple_ser!(12, A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of<T: Ser>(t: &T) -> Vec<u8> {
        let mut out = Vec::new();
        t.ser(&mut TextSerializer::new(&mut out));
        out
    }

    #[test]
    fn sequence_of_ints() {
        assert_eq!(text_of(&vec![1, 2, 3]), b"[1+2+3+]".to_vec());
    }

    #[test]
    fn dictionary_sorts_by_encoded_key() {
        let m: VecMap<Syrup, Syrup> = vec![
            (Syrup::from(Symbol::from("zz")), Syrup::from(1)),
            (Syrup::from(Symbol::from("a")), Syrup::from(2)),
        ]
        .into();
        // "1'a" sorts before "2'zz"
        assert_eq!(text_of(&Syrup::from(m)), b"{1'a2+2'zz1+}".to_vec());
    }

    #[test]
    fn set_canonical_order() {
        let s: VecSet<Syrup> = (0..34).map(Syrup::from).collect();
        let expect = "#0+1+10+11+12+13+14+15+16+17+18+19+2+20+21+22+23+24+25+\
                      26+27+28+29+3+30+31+32+33+4+5+6+7+8+9+$";
        assert_eq!(text_of(&Syrup::from(s)), expect.as_bytes().to_vec());
    }

    #[test]
    fn record_with_label() {
        let rec = Syrup::record(Symbol::from("date"), vec![Syrup::from(2024)]);
        assert_eq!(text_of(&rec), b"<4'date2024+>".to_vec());
    }

    #[test]
    fn optionals() {
        assert_eq!(text_of(&Option::<u8>::None), b"f".to_vec());
        assert_eq!(text_of(&Some(3u8)), b"3+".to_vec());
    }

    #[test]
    fn binary_collections_terminate() {
        let mut out = Vec::new();
        vec![1u8].ser(&mut BinarySerializer::new(&mut out));
        assert_eq!(out, vec![0xB5, 0xB0, 0x01, 0x01, 0x84]);
    }
}
