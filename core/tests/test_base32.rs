// # Base32 (RFC 4648)

use proptest::prelude::*;

use cryptify_core::codecs::base32;
use cryptify_core::codecs::CodecError;

#[test]
fn base32_hello_vectors() {
    assert_eq!(base32::encode("Hello"), "JBSWY3DP");
    assert_eq!(base32::encode("Hello World"), "JBSWY3DPEBLW64TMMQ======");
    assert_eq!(base32::decode("JBSWY3DPEBLW64TMMQ======").unwrap(), "Hello World");
}

#[test]
fn base32_decode_is_case_insensitive() {
    assert_eq!(base32::decode("jbswy3dp").unwrap(), "Hello");
    assert_eq!(base32::decode("JbSwY3dP").unwrap(), "Hello");
}

#[test]
fn base32_padding_is_optional_on_decode() {
    assert_eq!(base32::decode("JBSWY3DPEBLW64TMMQ").unwrap(), "Hello World");
}

#[test]
fn base32_unknown_symbol_is_an_error() {
    for bad in ["JBSW1===", "JBSWY3D8", "JBSW Y3DP", "MZXW6YQ!"] {
        match base32::decode(bad) {
            Err(CodecError::Decode { codec, .. }) => assert_eq!(codec, "base32"),
            other => panic!("{bad:?} gave {other:?}"),
        }
    }
}

#[test]
fn base32_empty_input() {
    assert_eq!(base32::encode(""), "");
    assert_eq!(base32::decode("").unwrap(), "");
    assert_eq!(base32::decode("========").unwrap(), "");
}

proptest! {
    #[test]
    fn prop_base32_round_trip(text in any::<String>()) {
        let encoded = base32::encode(&text);
        prop_assert_eq!(encoded.len() % 8, 0);
        prop_assert_eq!(base32::decode(&encoded).unwrap(), text);
    }

    #[test]
    fn prop_base32_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = base32::encode_bytes(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len().div_ceil(5) * 8);
        prop_assert_eq!(base32::decode_bytes(&encoded).unwrap(), bytes);
    }
}
