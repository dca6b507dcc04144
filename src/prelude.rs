pub use crate::{
    encoding::{
        decode_binary, decode_binary_full, encode_binary, encode_binary_full, encode_text,
        encode_text_full, parse, parse_with_capacity, ser_syrup, write_binary, write_text,
        Decode, Plan, Ser, Serializer, SerializerBytes, Step, SymbolStr,
    },
    errors::{ConversionError, Error, ScanError},
    float::Float,
    inum::Inum,
    rep::SyrupRep,
    scan::{Scanner, Token},
    vecmap::VecMap,
    vecset::VecSet,
    Bytes, HashMap, Symbol, Syrup,
};
pub use std::convert::TryFrom;
pub use syrup_derive::{Decode, Ser};
