use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::Num;
use proptest::prelude::*;
use syrup::{float::Float, vecmap::VecMap, vecset::VecSet, Syrup};

/// arbitrary big integer for use with proptest
pub fn arb_bigint() -> impl Strategy<Value = BigInt> {
    "-?1[0-1]{63,100}".prop_map(|n| -> BigInt { BigInt::from_str_radix(&n, 2).unwrap() })
}

/// arbitrary bytestring for use with proptest
pub fn arb_bytes() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..48).prop_map(Bytes::from)
}

/// arbitrary symbol name for use with proptest
pub fn arb_name() -> impl Strategy<Value = String> { "[a-z][a-z0-9_]{0,12}" }

/// arbitrary Syrup value for use with proptest
pub fn arb_syrup() -> impl Strategy<Value = Syrup> {
    let leaf = prop_oneof![
        // booleans
        any::<bool>().prop_map(Syrup::from),
        // integers
        any::<i64>().prop_map(Syrup::from),
        any::<u64>().prop_map(Syrup::from),
        any::<i128>().prop_map(Syrup::from),
        arb_bigint().prop_map(Syrup::from),
        // floats, as raw bit patterns so NaN payloads get exercised too
        any::<u32>().prop_map(|bits| Syrup::Flt(Float::Single(bits))),
        any::<u64>().prop_map(|bits| Syrup::Flt(Float::Double(bits))),
        // bytestrings
        arb_bytes().prop_map(Syrup::from),
        // strings
        ".*".prop_map(|s: String| Syrup::from(s)),
        // symbols
        arb_name().prop_map(Syrup::Sym),
    ];
    leaf.prop_recursive(
        4,  // max depth
        32, // max nodes
        8,  // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Syrup::from),
                prop::collection::vec(inner.clone(), 0..6)
                    .prop_map(|v| Syrup::from(VecSet::from(v))),
                prop::collection::vec((inner.clone(), inner.clone()), 0..6)
                    .prop_map(|pairs| Syrup::from(VecMap::from(pairs))),
                (inner.clone(), prop::collection::vec(inner, 0..4))
                    .prop_map(|(label, fields)| Syrup::record(label, fields)),
            ]
        },
    )
}
