use syrup::errors::Error;
use syrup::prelude::*;

#[derive(Ser, Decode, PartialEq, Debug, Clone)]
struct Packet {
    p1: u64,
    p2: i64,
    p3: String,
}

#[test]
fn struct_round_trip() {
    let input = b"{2'p11923+2'p243-2'p35\"Hello}";
    let v: Packet = parse(input.as_ref()).unwrap();
    assert_eq!(
        v,
        Packet {
            p1: 1923,
            p2: -43,
            p3: "Hello".to_string(),
        }
    );
    // re-encoding reproduces the canonical field order
    assert_eq!(encode_text_full(&v), input.to_vec());
}

#[test]
fn struct_accepts_any_key_order() {
    let input = b"{2'p35\"Hello2'p11923+2'p243-}";
    let v: Packet = parse(input.as_ref()).unwrap();
    assert_eq!(v.p1, 1923);
    assert_eq!(encode_text_full(&v), b"{2'p11923+2'p243-2'p35\"Hello}".to_vec());
}

#[test]
fn duplicate_key() {
    let input = b"{2'p11+2'p12+2'p243-2'p35\"Hello}";
    assert!(matches!(
        parse::<Packet, _>(input.as_ref()),
        Err(Error::KeyFoundBefore(k)) if k == "p1"
    ));
}

#[test]
fn unknown_key() {
    let input = b"{2'p91+}";
    assert!(matches!(
        parse::<Packet, _>(input.as_ref()),
        Err(Error::UnknownKey(k)) if k == "p9"
    ));
}

#[test]
fn missing_key() {
    let input = b"{2'p11+}";
    assert!(matches!(
        parse::<Packet, _>(input.as_ref()),
        Err(Error::MissingKey("p2"))
    ));
}

#[test]
fn not_a_dictionary() {
    assert!(matches!(
        parse::<Packet, _>(b"[".as_ref()),
        Err(Error::ExpectedDictionaryStart)
    ));
}

#[test]
fn extra_key_after_completion() {
    let input = b"{2'p11923+2'p243-2'p35\"Hellot}";
    assert!(matches!(
        parse::<Packet, _>(input.as_ref()),
        Err(Error::ExpectedDictionaryEnd)
    ));
}

#[derive(Ser, Decode, PartialEq, Debug, Clone)]
struct WithOpt {
    name: String,
    alias: Option<String>,
}

#[test]
fn optional_field() {
    let v = WithOpt {
        name: "ab".to_string(),
        alias: None,
    };
    let enc = encode_text_full(&v);
    assert_eq!(enc, b"{4'name2\"ab5'aliasf}".to_vec());
    let dec: WithOpt = parse(enc.as_slice()).unwrap();
    assert_eq!(dec, v);

    let v = WithOpt {
        name: "ab".to_string(),
        alias: Some("cd".to_string()),
    };
    let dec: WithOpt = parse(encode_text_full(&v).as_slice()).unwrap();
    assert_eq!(dec, v);
}

#[derive(Ser, Decode, PartialEq, Debug, Clone)]
struct Inner {
    a: u64,
}

#[derive(Ser, Decode, PartialEq, Debug, Clone)]
struct Outer {
    x: Inner,
    y: Vec<u64>,
    z: Box<u64>,
}

#[test]
fn nested_struct_round_trip() {
    let v = Outer {
        x: Inner { a: 7 },
        y: vec![1, 2],
        z: Box::new(9),
    };
    let enc = encode_text_full(&v);
    assert_eq!(enc, b"{1'x{1'a7+}1'y[1+2+]1'z9+}".to_vec());
    let dec: Outer = parse(enc.as_slice()).unwrap();
    assert_eq!(dec, v);
}

#[test]
fn nested_struct_round_trips_through_tiny_buffers() {
    let v = Outer {
        x: Inner { a: 7 },
        y: vec![1, 2],
        z: Box::new(9),
    };
    let enc = encode_text_full(&v);
    for cap in 1..8 {
        let dec: Outer = parse_with_capacity(enc.as_slice(), cap).unwrap();
        assert_eq!(dec, v);
    }
}

#[derive(Ser, PartialEq, Debug, Clone)]
enum Shape {
    Point,
    Circle(u64),
    Rect { w: u64, h: u64 },
}

#[test]
fn enum_encodings() {
    assert_eq!(encode_text_full(&Shape::Point), b"5'Point".to_vec());
    assert_eq!(encode_text_full(&Shape::Circle(3)), b"<6'Circle3+>".to_vec());
    // struct variants carry their fields as a dictionary, keys canonical
    assert_eq!(
        encode_text_full(&Shape::Rect { w: 1, h: 2 }),
        b"<4'Rect{1'h2+1'w1+}>".to_vec()
    );
}

#[derive(Ser, PartialEq, Debug, Clone)]
struct Pair(u8, u8);

#[derive(Ser, PartialEq, Debug, Clone)]
#[syrup(label = "packet-v2")]
struct Tagged(u64, bool);

#[derive(Ser, PartialEq, Debug, Clone)]
struct Marker;

#[test]
fn record_labels() {
    assert_eq!(encode_text_full(&Pair(1, 2)), b"<4'Pair1+2+>".to_vec());
    assert_eq!(
        encode_text_full(&Tagged(7, true)),
        b"<9'packet-v27+t>".to_vec()
    );
    assert_eq!(encode_text_full(&Marker), b"6'Marker".to_vec());
}

#[test]
fn derived_binary_encoding_decodes_as_a_tree() {
    let v = Packet {
        p1: 1,
        p2: -2,
        p3: "x".to_string(),
    };
    let tree = decode_binary_full(&encode_binary_full(&v)).unwrap();
    let map = tree.to_map().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(
        map.get(&Syrup::Sym("p1".to_string())),
        Some(&Syrup::from(1))
    );
}
