// # Ascii85

use proptest::prelude::*;

use cryptify_core::codecs::ascii85;
use cryptify_core::codecs::CodecError;

#[test]
fn ascii85_known_vectors() {
    assert_eq!(ascii85::encode("Man is distinguished"), "9jqo^BlbD-BleB1DJ+*+F(f,q");
    assert_eq!(ascii85::encode("Hello, world!"), "87cURD_*#TDfTZ)+T");
    assert_eq!(ascii85::decode("87cURD_*#TDfTZ)+T").unwrap(), "Hello, world!");
}

#[test]
fn ascii85_zero_group_collapses_to_z() {
    assert_eq!(ascii85::encode_bytes(&[0, 0, 0, 0]), "z");
    assert_eq!(ascii85::encode_bytes(&[0, 0, 0, 0, 0]), "z!!");
    assert_eq!(ascii85::decode_bytes("z!!").unwrap(), vec![0, 0, 0, 0, 0]);
    assert_eq!(ascii85::decode_bytes("zz").unwrap(), vec![0; 8]);
}

#[test]
fn ascii85_partial_zero_group_is_not_z() {
    assert_eq!(ascii85::encode_bytes(&[0, 0, 0]), "!!!!");
}

#[test]
fn ascii85_partial_groups_emit_n_plus_one_digits() {
    for n in 1..=3usize {
        let bytes = vec![0x41u8; n];
        let encoded = ascii85::encode_bytes(&bytes);
        assert_eq!(encoded.len(), n + 1, "n={n}");
        assert_eq!(ascii85::decode_bytes(&encoded).unwrap(), bytes);
    }
}

#[test]
fn ascii85_out_of_range_digit() {
    for bad in ["9jqo~", "v", "ab\u{e9}cd"] {
        assert!(matches!(ascii85::decode(bad), Err(CodecError::Decode { .. })), "{bad:?}");
    }
}

#[test]
fn ascii85_malformed_groups() {
    // 'z' inside a group, overflow
    assert!(ascii85::decode_bytes("9jz").is_err());
    assert!(ascii85::decode_bytes("uuuuu").is_err());
    assert!(ascii85::decode_bytes("uu").is_err());
}

#[test]
fn ascii85_single_trailing_digit_contributes_nothing() {
    assert_eq!(ascii85::decode_bytes("9jqo^!").unwrap(), b"Man ");
    assert_eq!(ascii85::decode_bytes("!").unwrap(), Vec::<u8>::new());
    assert_eq!(ascii85::decode("").unwrap(), "");
}

#[test]
fn ascii85_ignores_whitespace() {
    assert_eq!(ascii85::decode("9jqo^ BlbD-\nBleB1DJ+*+F(f,q").unwrap(), "Man is distinguished");
}

proptest! {
    #[test]
    fn prop_ascii85_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = ascii85::encode_bytes(&bytes);
        prop_assert!(encoded.chars().all(|c| c == 'z' || ('!'..='u').contains(&c)));
        prop_assert_eq!(ascii85::decode_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn prop_ascii85_text_round_trip(text in any::<String>()) {
        prop_assert_eq!(ascii85::decode(&ascii85::encode(&text)).unwrap(), text);
    }
}
