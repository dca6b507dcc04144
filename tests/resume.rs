//! Feeding a document in chunks must be indistinguishable from feeding it
//! whole, at every split point.

use proptest::prelude::*;
use syrup::errors::ScanError;
use syrup::prelude::*;
use syrup_strategy::arb_syrup;

/// A token stream with partial deliveries folded back together.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Ev {
    Bool(bool),
    Int(u64, bool),
    Float(Vec<u8>),
    Double(Vec<u8>),
    Bytes(Vec<u8>),
    Str(Vec<u8>),
    Sym(Vec<u8>),
    DictStart,
    DictEnd,
    SeqStart,
    SeqEnd,
    RecStart,
    RecEnd,
    SetStart,
    SetEnd,
}

/// Drives a scanner over the chunks and folds the tokens into [`Ev`]s.
fn events(chunks: &[&[u8]]) -> Vec<Ev> {
    let mut scanner = Scanner::new();
    let mut out = Vec::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut chunks = chunks.iter();
    let mut input: &[u8] = &[];

    loop {
        match scanner.next(&mut input) {
            Ok(Token::End) => return out,
            Ok(tok) => {
                match tok {
                    Token::Bool(b) => out.push(Ev::Bool(b)),
                    Token::Int {
                        magnitude,
                        negative,
                        ..
                    } => out.push(Ev::Int(magnitude, negative)),
                    Token::PartialNum(_) => {}
                    Token::PartialFloat { slice, .. }
                    | Token::PartialDouble { slice, .. }
                    | Token::PartialBytes { slice, .. }
                    | Token::PartialStr { slice, .. }
                    | Token::PartialSym { slice, .. } => pending.extend_from_slice(slice),
                    Token::Float(slice) => {
                        pending.extend_from_slice(slice);
                        out.push(Ev::Float(std::mem::replace(&mut pending, Vec::new())));
                    }
                    Token::Double(slice) => {
                        pending.extend_from_slice(slice);
                        out.push(Ev::Double(std::mem::replace(&mut pending, Vec::new())));
                    }
                    Token::Bytes(slice) => {
                        pending.extend_from_slice(slice);
                        out.push(Ev::Bytes(std::mem::replace(&mut pending, Vec::new())));
                    }
                    Token::Str(slice) => {
                        pending.extend_from_slice(slice);
                        out.push(Ev::Str(std::mem::replace(&mut pending, Vec::new())));
                    }
                    Token::Sym(slice) => {
                        pending.extend_from_slice(slice);
                        out.push(Ev::Sym(std::mem::replace(&mut pending, Vec::new())));
                    }
                    Token::DictStart => out.push(Ev::DictStart),
                    Token::DictEnd => out.push(Ev::DictEnd),
                    Token::SeqStart => out.push(Ev::SeqStart),
                    Token::SeqEnd => out.push(Ev::SeqEnd),
                    Token::RecStart => out.push(Ev::RecStart),
                    Token::RecEnd => out.push(Ev::RecEnd),
                    Token::SetStart => out.push(Ev::SetStart),
                    Token::SetEnd => out.push(Ev::SetEnd),
                    Token::End => unreachable!(),
                }
            }
            Err(ScanError::BufferUnderrun) => {
                match chunks.next() {
                    Some(chunk) => input = *chunk,
                    None => scanner.end_input(),
                }
            }
            Err(e) => panic!("scan failed: {}", e),
        }
    }
}

/// A document exercising every token kind, with payload bytes that look
/// like structural bytes.
fn sample_doc() -> Vec<u8> {
    let mut doc = Vec::new();
    doc.extend_from_slice(b"<6'sample{3:a{]1923+1'b[");
    doc.extend_from_slice(b"F\x3F\x80\x00\x00");
    doc.extend_from_slice(b"D\x40\x09\x21\xFB\x54\x44\x2D\x18");
    doc.extend_from_slice(b"43-]}#t5\"He{lo$>");
    doc
}

#[test]
fn every_two_chunk_split_scans_identically() {
    let doc = sample_doc();
    let whole = events(&[&doc]);
    for split in 0..=doc.len() {
        let (a, b) = doc.split_at(split);
        assert_eq!(events(&[a, b]), whole, "split at {}", split);
    }
}

#[test]
fn byte_at_a_time_scans_identically() {
    let doc = sample_doc();
    let whole = events(&[&doc]);
    let chunks: Vec<&[u8]> = doc.chunks(1).collect();
    assert_eq!(events(&chunks), whole);
}

#[test]
fn three_chunk_splits_scan_identically() {
    let doc = sample_doc();
    let whole = events(&[&doc]);
    for first in (0..=doc.len()).step_by(3) {
        for second in (first..=doc.len()).step_by(5) {
            let chunks = [&doc[..first], &doc[first..second], &doc[second..]];
            assert_eq!(events(&chunks), whole, "splits at {}/{}", first, second);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn tiny_refill_buffers_parse_the_same(k in arb_syrup(), cap in 1usize..24) {
        let enc = encode_text_full(&k);
        let whole: Syrup = parse(enc.as_slice()).unwrap();
        let chunked: Syrup = parse_with_capacity(enc.as_slice(), cap).unwrap();
        prop_assert_eq!(&whole, &k);
        prop_assert_eq!(&chunked, &k);
    }
}
