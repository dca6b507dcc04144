use proptest::prelude::*;
use syrup::prelude::*;
use syrup_strategy::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, ..ProptestConfig::default() })]

    #[test]
    fn binary_round_trip(k in arb_syrup()) {
        let enc = encode_binary_full(&k);
        let dec = decode_binary_full(&enc).unwrap();
        prop_assert_eq!(dec, k);
    }

    #[test]
    fn text_round_trip(k in arb_syrup()) {
        let enc = encode_text_full(&k);
        let dec: Syrup = parse(enc.as_slice()).unwrap();
        prop_assert_eq!(dec, k);
    }

    #[test]
    fn canonical_output_is_stable(k in arb_syrup()) {
        let text = encode_text_full(&k);
        let reparsed: Syrup = parse(text.as_slice()).unwrap();
        prop_assert_eq!(encode_text_full(&reparsed), text);

        let bin = encode_binary_full(&k);
        let redecoded = decode_binary_full(&bin).unwrap();
        prop_assert_eq!(encode_binary_full(&redecoded), bin);
    }

    #[test]
    fn host_ordering_is_irrelevant(
        pairs in prop::collection::btree_map(arb_name(), arb_syrup(), 0..8),
    ) {
        // the same entries behind two containers with different iteration
        // orders must produce byte-identical output
        let vm: VecMap<Symbol, Syrup> = pairs
            .iter()
            .map(|(k, v)| (Symbol::from(k.as_str()), v.clone()))
            .collect();
        let hm: HashMap<Symbol, Syrup> = pairs
            .iter()
            .map(|(k, v)| (Symbol::from(k.as_str()), v.clone()))
            .collect();

        prop_assert_eq!(encode_text_full(&vm), encode_text_full(&hm));
        prop_assert_eq!(encode_binary_full(&vm), encode_binary_full(&hm));
    }

    #[test]
    fn binary_int_minimum_width(i in any::<i64>()) {
        let enc = encode_binary_full(&i);
        // tag, one LEB128 length byte, payload
        let payload = &enc[2..];
        if i == 0 {
            prop_assert!(payload.is_empty());
        } else {
            let bits = 64 - (if i < 0 { !i } else { i }).leading_zeros() as usize;
            prop_assert_eq!(payload.len(), bits / 8 + 1);
        }
    }

    #[test]
    fn typed_binary_reads(v in prop::collection::vec(any::<u32>(), 0..16)) {
        let enc = encode_binary_full(&v);
        let dec: Vec<u32> = decode_binary_full(&enc).unwrap().into_rep().unwrap();
        prop_assert_eq!(dec, v);
    }
}
