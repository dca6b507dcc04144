//! The plan engine: typed, resumable reading of the text format.
//!
//! A [`Plan`] is a per-shape state machine. The driver feeds it one
//! [`Token`] at a time; the plan answers [`Step::Done`] with a finished
//! value, [`Step::More`] when it needs the next token, or an error. Plans
//! own every allocation for the value under construction, so dropping a
//! plan — which the driver does on any error — releases all of it.
//!
//! [`parse`] is the driver: it owns the scanner, a small refill buffer,
//! and the root plan for the target type, and loops until the plan
//! finishes or something goes wrong.
//!
//! ```
//! use syrup::encoding::parse;
//!
//! let nums: Vec<u64> = parse(b"[1+2+3+]".as_ref()).unwrap();
//! assert_eq!(nums, vec![1, 2, 3]);
//! ```

use crate::{
    errors::{Error, ScanError},
    float::Float,
    inum::Inum,
    scan::{Scanner, Token},
    vecmap::VecMap,
    vecset::VecSet,
    Bytes, Symbol, Syrup,
};
use std::{convert::TryFrom, io::Read};

/// What a plan has to say after eating a token.
pub enum Step<T> {
    /// The value is finished.
    Done(T),
    /// The plan persists; feed it the next token.
    More,
}

/// A resumable state machine that assembles one value of `Output` from a
/// token stream.
pub trait Plan: Default {
    type Output;

    /// Consume one token.
    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Self::Output>, Error>;
}

/// A type that can be read from the text format.
pub trait Decode: Sized {
    type Plan: Plan<Output = Self>;
}

// atoms

#[derive(Default)]
pub struct BoolPlan;

impl Plan for BoolPlan {
    type Output = bool;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<bool>, Error> {
        match tok {
            Token::Bool(b) => Ok(Step::Done(b)),
            _ => Err(Error::UnexpectedToken),
        }
    }
}

impl Decode for bool {
    type Plan = BoolPlan;
}

#[derive(Default)]
pub struct InumPlan;

impl Plan for InumPlan {
    type Output = Inum;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Inum>, Error> {
        match tok {
            Token::PartialNum(_) => Ok(Step::More),
            Token::Int {
                magnitude,
                negative,
                ..
            } => Ok(Step::Done(Inum::from_magnitude(magnitude, negative))),
            _ => Err(Error::UnexpectedToken),
        }
    }
}

impl Decode for Inum {
    type Plan = InumPlan;
}

macro_rules! int_plan {
    ($plan:ident, $t:ty) => {
        #[derive(Default)]
        pub struct $plan;

        impl Plan for $plan {
            type Output = $t;

            fn feed(&mut self, tok: Token<'_>) -> Result<Step<$t>, Error> {
                match tok {
                    Token::PartialNum(_) => Ok(Step::More),
                    Token::Int {
                        magnitude,
                        negative,
                        ..
                    } => {
                        let wide = i128::try_from(Inum::from_magnitude(magnitude, negative))
                            .map_err(|_| Error::IllFit)?;
                        <$t>::try_from(wide).map(Step::Done).map_err(|_| Error::IllFit)
                    }
                    _ => Err(Error::UnexpectedToken),
                }
            }
        }

        impl Decode for $t {
            type Plan = $plan;
        }
    };
}

// sizes
int_plan!(UsizePlan, usize);
int_plan!(IsizePlan, isize);

// 8-bit ints
int_plan!(U8Plan, u8);
int_plan!(I8Plan, i8);

// 16-bit ints
int_plan!(U16Plan, u16);
int_plan!(I16Plan, i16);

// 32-bit ints
int_plan!(U32Plan, u32);
int_plan!(I32Plan, i32);

// 64-bit ints
int_plan!(U64Plan, u64);
int_plan!(I64Plan, i64);

// 128-bit ints
int_plan!(U128Plan, u128);
int_plan!(I128Plan, i128);

macro_rules! float_plan {
    ($plan:ident, $t:ty, $width:expr, $full:ident, $partial:ident,
     $other_full:ident, $other_partial:ident, $bits:ty) => {
        #[derive(Default)]
        pub struct $plan {
            buf: [u8; $width],
            filled: usize,
        }

        impl $plan {
            fn extend(&mut self, slice: &[u8]) -> Result<(), Error> {
                if self.filled + slice.len() > $width {
                    return Err(Error::IllFit);
                }
                self.buf[self.filled..self.filled + slice.len()].copy_from_slice(slice);
                self.filled += slice.len();
                Ok(())
            }
        }

        impl Plan for $plan {
            type Output = $t;

            fn feed(&mut self, tok: Token<'_>) -> Result<Step<$t>, Error> {
                match tok {
                    Token::$partial { slice, .. } => {
                        self.extend(slice)?;
                        Ok(Step::More)
                    }
                    Token::$full(slice) => {
                        self.extend(slice)?;
                        if self.filled == $width {
                            Ok(Step::Done(<$t>::from_bits(<$bits>::from_be_bytes(self.buf))))
                        } else {
                            Err(Error::IllFit)
                        }
                    }
                    Token::$other_full(_) | Token::$other_partial { .. } => Err(Error::IllFit),
                    _ => Err(Error::UnexpectedToken),
                }
            }
        }

        impl Decode for $t {
            type Plan = $plan;
        }
    };
}

float_plan!(F32Plan, f32, 4, Float, PartialFloat, Double, PartialDouble, u32);
float_plan!(F64Plan, f64, 8, Double, PartialDouble, Float, PartialFloat, u64);

macro_rules! payload_plan {
    ($plan:ident, $full:ident, $partial:ident) => {
        /// Accumulates a length-prefixed payload. The first fragment
        /// reserves room for the whole payload; a full token with no
        /// preceding fragment is copied once.
        #[derive(Default)]
        pub struct $plan {
            buf: Vec<u8>,
        }

        impl Plan for $plan {
            type Output = Vec<u8>;

            fn feed(&mut self, tok: Token<'_>) -> Result<Step<Vec<u8>>, Error> {
                match tok {
                    Token::$partial { remaining, slice } => {
                        if self.buf.is_empty() {
                            self.buf.reserve(remaining + slice.len());
                        }
                        self.buf.extend_from_slice(slice);
                        Ok(Step::More)
                    }
                    Token::$full(slice) => {
                        if self.buf.is_empty() {
                            Ok(Step::Done(slice.to_vec()))
                        } else {
                            let mut buf = std::mem::replace(&mut self.buf, Vec::new());
                            buf.extend_from_slice(slice);
                            Ok(Step::Done(buf))
                        }
                    }
                    _ => Err(Error::UnexpectedToken),
                }
            }
        }
    };
}

payload_plan!(RawStringPlan, Str, PartialStr);
payload_plan!(RawSymbolPlan, Sym, PartialSym);
payload_plan!(RawBytesPlan, Bytes, PartialBytes);

#[derive(Default)]
pub struct StringPlan(RawStringPlan);

impl Plan for StringPlan {
    type Output = String;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<String>, Error> {
        match self.0.feed(tok)? {
            Step::More => Ok(Step::More),
            Step::Done(buf) => {
                String::from_utf8(buf)
                    .map(Step::Done)
                    .map_err(|_| Error::InvalidUtf8)
            }
        }
    }
}

impl Decode for String {
    type Plan = StringPlan;
}

#[derive(Default)]
pub struct SymbolPlan(RawSymbolPlan);

impl Plan for SymbolPlan {
    type Output = Symbol;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Symbol>, Error> {
        match self.0.feed(tok)? {
            Step::More => Ok(Step::More),
            Step::Done(buf) => {
                String::from_utf8(buf)
                    .map(|s| Step::Done(Symbol(s)))
                    .map_err(|_| Error::InvalidUtf8)
            }
        }
    }
}

impl Decode for Symbol {
    type Plan = SymbolPlan;
}

#[derive(Default)]
pub struct BytesPlan(RawBytesPlan);

impl Plan for BytesPlan {
    type Output = Bytes;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Bytes>, Error> {
        match self.0.feed(tok)? {
            Step::More => Ok(Step::More),
            Step::Done(buf) => Ok(Step::Done(Bytes::from(buf))),
        }
    }
}

impl Decode for Bytes {
    type Plan = BytesPlan;
}

// wrappers

/// `f` is an absent value; anything else runs the inner plan. A literal
/// `t` is refused, so `Some(true)` never round-trips.
pub struct OptionPlan<T: Decode> {
    inner: Option<T::Plan>,
}

impl<T: Decode> Default for OptionPlan<T> {
    fn default() -> Self { OptionPlan { inner: None } }
}

impl<T: Decode> Plan for OptionPlan<T> {
    type Output = Option<T>;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Option<T>>, Error> {
        match &mut self.inner {
            None => {
                match tok {
                    Token::Bool(false) => Ok(Step::Done(None)),
                    Token::Bool(true) => Err(Error::UnexpectedToken),
                    other => {
                        let mut plan = T::Plan::default();
                        match plan.feed(other)? {
                            Step::Done(v) => Ok(Step::Done(Some(v))),
                            Step::More => {
                                self.inner = Some(plan);
                                Ok(Step::More)
                            }
                        }
                    }
                }
            }
            Some(plan) => {
                match plan.feed(tok)? {
                    Step::Done(v) => Ok(Step::Done(Some(v))),
                    Step::More => Ok(Step::More),
                }
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    type Plan = OptionPlan<T>;
}

/// Runs the inner plan, then moves the finished value behind a pointer.
pub struct BoxPlan<T: Decode>(T::Plan);

impl<T: Decode> Default for BoxPlan<T> {
    fn default() -> Self { BoxPlan(T::Plan::default()) }
}

impl<T: Decode> Plan for BoxPlan<T> {
    type Output = Box<T>;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Box<T>>, Error> {
        match self.0.feed(tok)? {
            Step::Done(v) => Ok(Step::Done(Box::new(v))),
            Step::More => Ok(Step::More),
        }
    }
}

impl<T: Decode> Decode for Box<T> {
    type Plan = BoxPlan<T>;
}

// aggregates

pub struct SeqPlan<T: Decode> {
    started: bool,
    items: Vec<T>,
    inner: Option<T::Plan>,
}

impl<T: Decode> Default for SeqPlan<T> {
    fn default() -> Self {
        SeqPlan {
            started: false,
            items: Vec::new(),
            inner: None,
        }
    }
}

impl<T: Decode> Plan for SeqPlan<T> {
    type Output = Vec<T>;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Vec<T>>, Error> {
        if !self.started {
            return match tok {
                Token::SeqStart => {
                    self.started = true;
                    Ok(Step::More)
                }
                _ => Err(Error::UnexpectedToken),
            };
        }
        if let Some(plan) = &mut self.inner {
            if let Step::Done(v) = plan.feed(tok)? {
                self.items.push(v);
                self.inner = None;
            }
            return Ok(Step::More);
        }
        match tok {
            Token::SeqEnd => Ok(Step::Done(std::mem::replace(&mut self.items, Vec::new()))),
            other => {
                let mut plan = T::Plan::default();
                match plan.feed(other)? {
                    Step::Done(v) => self.items.push(v),
                    Step::More => self.inner = Some(plan),
                }
                Ok(Step::More)
            }
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    type Plan = SeqPlan<T>;
}

pub struct SetPlan<T: Decode + Ord> {
    started: bool,
    items: Vec<T>,
    inner: Option<T::Plan>,
}

impl<T: Decode + Ord> Default for SetPlan<T> {
    fn default() -> Self {
        SetPlan {
            started: false,
            items: Vec::new(),
            inner: None,
        }
    }
}

impl<T: Decode + Ord> Plan for SetPlan<T> {
    type Output = VecSet<T>;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<VecSet<T>>, Error> {
        if !self.started {
            return match tok {
                Token::SetStart => {
                    self.started = true;
                    Ok(Step::More)
                }
                _ => Err(Error::UnexpectedToken),
            };
        }
        if let Some(plan) = &mut self.inner {
            if let Step::Done(v) = plan.feed(tok)? {
                self.items.push(v);
                self.inner = None;
            }
            return Ok(Step::More);
        }
        match tok {
            Token::SetEnd => {
                Ok(Step::Done(VecSet::from(std::mem::replace(
                    &mut self.items,
                    Vec::new(),
                ))))
            }
            other => {
                let mut plan = T::Plan::default();
                match plan.feed(other)? {
                    Step::Done(v) => self.items.push(v),
                    Step::More => self.inner = Some(plan),
                }
                Ok(Step::More)
            }
        }
    }
}

impl<T: Decode + Ord> Decode for VecSet<T> {
    type Plan = SetPlan<T>;
}

pub struct MapPlan<K: Decode + Ord, V: Decode> {
    started: bool,
    pairs: Vec<(K, V)>,
    key: Option<K::Plan>,
    pending: Option<K>,
    val: Option<V::Plan>,
}

impl<K: Decode + Ord, V: Decode> Default for MapPlan<K, V> {
    fn default() -> Self {
        MapPlan {
            started: false,
            pairs: Vec::new(),
            key: None,
            pending: None,
            val: None,
        }
    }
}

impl<K: Decode + Ord, V: Decode> Plan for MapPlan<K, V> {
    type Output = VecMap<K, V>;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<VecMap<K, V>>, Error> {
        if !self.started {
            return match tok {
                Token::DictStart => {
                    self.started = true;
                    Ok(Step::More)
                }
                _ => Err(Error::ExpectedDictionaryStart),
            };
        }
        if let Some(plan) = &mut self.val {
            if let Step::Done(v) = plan.feed(tok)? {
                let k = self.pending.take().expect("a value plan implies a finished key");
                self.pairs.push((k, v));
                self.val = None;
            }
            return Ok(Step::More);
        }
        if let Some(plan) = &mut self.key {
            if let Step::Done(k) = plan.feed(tok)? {
                self.pending = Some(k);
                self.key = None;
                self.val = Some(V::Plan::default());
            }
            return Ok(Step::More);
        }
        match tok {
            Token::DictEnd => {
                Ok(Step::Done(VecMap::from(std::mem::replace(
                    &mut self.pairs,
                    Vec::new(),
                ))))
            }
            other => {
                let mut plan = K::Plan::default();
                match plan.feed(other)? {
                    Step::Done(k) => {
                        self.pending = Some(k);
                        self.val = Some(V::Plan::default());
                    }
                    Step::More => self.key = Some(plan),
                }
                Ok(Step::More)
            }
        }
    }
}

impl<K: Decode + Ord, V: Decode> Decode for VecMap<K, V> {
    type Plan = MapPlan<K, V>;
}

// the whole tree

enum Frame {
    Seq(Vec<Syrup>),
    Set(Vec<Syrup>),
    Rec(Option<Syrup>, Vec<Syrup>),
    MapKey(Vec<(Syrup, Syrup)>),
    MapVal(Vec<(Syrup, Syrup)>, Syrup),
}

/// Assembles any [`Syrup`] value, nesting included, with an explicit frame
/// stack instead of recursion.
#[derive(Default)]
pub struct SyrupPlan {
    stack: Vec<Frame>,
    atom: Vec<u8>,
}

impl SyrupPlan {
    /// A finished value either settles into the enclosing frame or, with
    /// no frame left, finishes the plan.
    fn complete(&mut self, v: Syrup) -> Result<Step<Syrup>, Error> {
        match self.stack.pop() {
            None => Ok(Step::Done(v)),
            Some(Frame::Seq(mut items)) => {
                items.push(v);
                self.stack.push(Frame::Seq(items));
                Ok(Step::More)
            }
            Some(Frame::Set(mut items)) => {
                items.push(v);
                self.stack.push(Frame::Set(items));
                Ok(Step::More)
            }
            Some(Frame::Rec(label, mut fields)) => {
                match label {
                    None => self.stack.push(Frame::Rec(Some(v), fields)),
                    Some(l) => {
                        fields.push(v);
                        self.stack.push(Frame::Rec(Some(l), fields));
                    }
                }
                Ok(Step::More)
            }
            Some(Frame::MapKey(pairs)) => {
                self.stack.push(Frame::MapVal(pairs, v));
                Ok(Step::More)
            }
            Some(Frame::MapVal(mut pairs, k)) => {
                pairs.push((k, v));
                self.stack.push(Frame::MapKey(pairs));
                Ok(Step::More)
            }
        }
    }

    fn take_atom(&mut self, tail: &[u8]) -> Vec<u8> {
        if self.atom.is_empty() {
            tail.to_vec()
        } else {
            let mut buf = std::mem::replace(&mut self.atom, Vec::new());
            buf.extend_from_slice(tail);
            buf
        }
    }
}

impl Plan for SyrupPlan {
    type Output = Syrup;

    fn feed(&mut self, tok: Token<'_>) -> Result<Step<Syrup>, Error> {
        match tok {
            Token::Bool(b) => self.complete(Syrup::Bool(b)),
            Token::PartialNum(_) => Ok(Step::More),
            Token::Int {
                magnitude,
                negative,
                ..
            } => self.complete(Syrup::Num(Inum::from_magnitude(magnitude, negative))),
            Token::PartialFloat { remaining, slice }
            | Token::PartialDouble { remaining, slice }
            | Token::PartialStr { remaining, slice }
            | Token::PartialSym { remaining, slice }
            | Token::PartialBytes { remaining, slice } => {
                if self.atom.is_empty() {
                    self.atom.reserve(remaining + slice.len());
                }
                self.atom.extend_from_slice(slice);
                Ok(Step::More)
            }
            Token::Float(slice) => {
                let buf = self.take_atom(slice);
                if buf.len() != 4 {
                    return Err(Error::IllFit);
                }
                let mut bits = [0; 4];
                bits.copy_from_slice(&buf);
                self.complete(Syrup::Flt(Float::Single(u32::from_be_bytes(bits))))
            }
            Token::Double(slice) => {
                let buf = self.take_atom(slice);
                if buf.len() != 8 {
                    return Err(Error::IllFit);
                }
                let mut bits = [0; 8];
                bits.copy_from_slice(&buf);
                self.complete(Syrup::Flt(Float::Double(u64::from_be_bytes(bits))))
            }
            Token::Str(slice) => {
                let buf = self.take_atom(slice);
                match String::from_utf8(buf) {
                    Ok(s) => self.complete(Syrup::Str(s)),
                    Err(_) => Err(Error::InvalidUtf8),
                }
            }
            Token::Sym(slice) => {
                let buf = self.take_atom(slice);
                match String::from_utf8(buf) {
                    Ok(s) => self.complete(Syrup::Sym(s)),
                    Err(_) => Err(Error::InvalidUtf8),
                }
            }
            Token::Bytes(slice) => {
                let buf = self.take_atom(slice);
                self.complete(Syrup::Byt(Bytes::from(buf)))
            }
            Token::SeqStart => {
                self.stack.push(Frame::Seq(Vec::new()));
                Ok(Step::More)
            }
            Token::SeqEnd => {
                match self.stack.pop() {
                    Some(Frame::Seq(items)) => self.complete(Syrup::Seq(items)),
                    _ => Err(Error::UnexpectedToken),
                }
            }
            Token::SetStart => {
                self.stack.push(Frame::Set(Vec::new()));
                Ok(Step::More)
            }
            Token::SetEnd => {
                match self.stack.pop() {
                    Some(Frame::Set(items)) => self.complete(Syrup::Set(VecSet::from(items))),
                    _ => Err(Error::UnexpectedToken),
                }
            }
            Token::RecStart => {
                self.stack.push(Frame::Rec(None, Vec::new()));
                Ok(Step::More)
            }
            Token::RecEnd => {
                match self.stack.pop() {
                    Some(Frame::Rec(Some(label), fields)) => {
                        self.complete(Syrup::Rec(Box::new(label), fields))
                    }
                    _ => Err(Error::UnexpectedToken),
                }
            }
            Token::DictStart => {
                self.stack.push(Frame::MapKey(Vec::new()));
                Ok(Step::More)
            }
            Token::DictEnd => {
                match self.stack.pop() {
                    Some(Frame::MapKey(pairs)) => {
                        // only derived struct plans police keys; here
                        // `VecMap` keeps the first entry per key
                        self.complete(Syrup::Map(VecMap::from(pairs)))
                    }
                    _ => Err(Error::UnexpectedToken),
                }
            }
            Token::End => Err(Error::UnexpectedEndOfInput),
        }
    }
}

impl Decode for Syrup {
    type Plan = SyrupPlan;
}

/// States of a struct plan, as generated by `#[derive(Decode)]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StructState {
    /// Nothing consumed yet; the opening `{` must come first.
    Start,
    /// Between entries: a field-name symbol or the closing `}`.
    Key,
    /// Inside a field's value.
    Value,
    /// Every field is present; only `}` is admissible.
    End,
}

impl Default for StructState {
    fn default() -> Self { StructState::Start }
}

// the driver

/// How many bytes [`parse`] asks the source for at a time.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// Reads one value of `T` from a byte source, streaming.
///
/// # Example
///
/// ```
/// use syrup::encoding::parse;
///
/// let greeting: String = parse(b"5\"Hello".as_ref()).unwrap();
/// assert_eq!(greeting, "Hello");
/// ```
pub fn parse<T: Decode, R: Read>(src: R) -> Result<T, Error> {
    parse_with_capacity(src, DEFAULT_BUFFER_SIZE)
}

/// [`parse`] with a caller-chosen refill buffer size.
pub fn parse_with_capacity<T: Decode, R: Read>(mut src: R, cap: usize) -> Result<T, Error> {
    let mut buf = vec![0; cap.max(1)];
    let mut start = 0;
    let mut len = 0;
    let mut scanner = Scanner::new();
    let mut plan = T::Plan::default();

    loop {
        let mut window = &buf[start..len];
        match scanner.next(&mut window) {
            Ok(Token::End) => return Err(Error::UnexpectedEndOfInput),
            Ok(tok) => {
                start = len - window.len();
                if let Step::Done(v) = plan.feed(tok)? {
                    return Ok(v);
                }
            }
            Err(ScanError::BufferUnderrun) => {
                let n = src.read(&mut buf)?;
                if n == 0 {
                    scanner.end_input();
                }
                start = 0;
                len = n;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms() {
        assert_eq!(parse::<bool, _>(b"t".as_ref()).unwrap(), true);
        assert_eq!(parse::<u64, _>(b"1923+".as_ref()).unwrap(), 1923);
        assert_eq!(parse::<i64, _>(b"43-".as_ref()).unwrap(), -43);
        assert_eq!(
            parse::<String, _>(b"5\"Hello".as_ref()).unwrap(),
            "Hello"
        );
        assert_eq!(
            parse::<Symbol, _>(b"2'p1".as_ref()).unwrap(),
            Symbol::from("p1")
        );
        assert_eq!(
            parse::<Bytes, _>(b"3:\x00\x01\x02".as_ref()).unwrap(),
            Bytes::from_static(&[0, 1, 2])
        );
        assert_eq!(
            parse::<f32, _>(b"F\x3F\x80\x00\x00".as_ref()).unwrap(),
            1.0
        );
        assert_eq!(
            parse::<f64, _>(b"D\x3F\xF0\x00\x00\x00\x00\x00\x00".as_ref()).unwrap(),
            1.0
        );
    }

    #[test]
    fn ill_fits() {
        assert!(matches!(
            parse::<u8, _>(b"300+".as_ref()),
            Err(Error::IllFit)
        ));
        assert!(matches!(
            parse::<u64, _>(b"1-".as_ref()),
            Err(Error::IllFit)
        ));
        assert!(matches!(
            parse::<f32, _>(b"D\x3F\xF0\x00\x00\x00\x00\x00\x00".as_ref()),
            Err(Error::IllFit)
        ));
    }

    #[test]
    fn tiny_buffers_still_parse() {
        for cap in 1..8 {
            let s: String =
                parse_with_capacity(b"29'Mechanically stabilized earth".as_ref(), cap)
                    .map(|s: Symbol| s.0)
                    .unwrap();
            assert_eq!(s, "Mechanically stabilized earth");
        }
    }

    #[test]
    fn aggregates() {
        let v: Vec<u64> = parse(b"[1+2+3+]".as_ref()).unwrap();
        assert_eq!(v, vec![1, 2, 3]);

        let s: VecSet<u64> = parse(b"#1+2+3+$".as_ref()).unwrap();
        assert_eq!(s, VecSet::from(vec![1, 2, 3]));

        let m: VecMap<Symbol, u64> = parse(b"{1'a1+1'b2+}".as_ref()).unwrap();
        assert_eq!(m.get(&Symbol::from("a")), Some(&1));
        assert_eq!(m.get(&Symbol::from("b")), Some(&2));
    }

    #[test]
    fn nested_tree() {
        let v: Syrup = parse(b"<4'date{1'a[1+2+]1'b#t$}>".as_ref()).unwrap();
        let (label, fields) = v.to_rec().unwrap();
        assert_eq!(label.as_sym(), Some("date"));
        assert_eq!(fields.len(), 1);
        let map = fields[0].to_map().unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn optionals() {
        assert_eq!(parse::<Option<u64>, _>(b"f".as_ref()).unwrap(), None);
        assert_eq!(
            parse::<Option<u64>, _>(b"7+".as_ref()).unwrap(),
            Some(7)
        );
        assert!(parse::<Option<u64>, _>(b"t".as_ref()).is_err());
    }

    #[test]
    fn boxed() {
        let b: Box<u64> = parse(b"7+".as_ref()).unwrap();
        assert_eq!(*b, 7);
    }

    #[test]
    fn truncated_input() {
        assert!(matches!(
            parse::<Vec<u64>, _>(b"[1+2+".as_ref()),
            Err(Error::UnexpectedEndOfInput)
        ));
        assert!(matches!(
            parse::<String, _>(b"5\"He".as_ref()),
            Err(Error::UnexpectedEndOfInput)
        ));
    }

    #[test]
    fn wrong_shape() {
        assert!(matches!(
            parse::<Vec<u64>, _>(b"t".as_ref()),
            Err(Error::UnexpectedToken)
        ));
        assert!(matches!(
            parse::<VecMap<Symbol, u64>, _>(b"[".as_ref()),
            Err(Error::ExpectedDictionaryStart)
        ));
    }
}
