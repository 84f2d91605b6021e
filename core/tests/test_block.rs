// # ECB block cipher, length-derived padding and block keys

use cryptify_core::codecs::CodecError;
use cryptify_core::crypto::{pad_to_block, strip_padding_lenient, BlockKey, EcbCipher};

const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

fn cipher() -> EcbCipher {
    EcbCipher::new(&BlockKey::from_hex(KEY_HEX).unwrap())
}

// ## 1. Round trips and ciphertext sizes

#[test]
fn round_trip_boundary_lengths() {
    let c = cipher();
    for (len, ct_len) in [(0, 0), (1, 16), (15, 16), (16, 16), (17, 32), (32, 32)] {
        let text: String = "The quick brown fox jumps over the lazy dog"
            .chars()
            .cycle()
            .take(len)
            .collect();
        let ct = c.encrypt(text.as_bytes());
        assert_eq!(ct.len(), ct_len, "len={len}");
        assert_eq!(c.decrypt(&ct).unwrap(), text.as_bytes(), "len={len}");
    }
}

#[test]
fn aligned_input_gets_no_padding_block() {
    // FIPS-197 appendix C.1: with no padding added, this is raw AES-128.
    let pt = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let ct = cipher().encrypt(&pt);
    assert_eq!(hex::encode(&ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn identical_blocks_give_identical_ciphertext() {
    let ct = cipher().encrypt(&[b'A'; 32]);
    assert_eq!(ct[..16], ct[16..]);
}

#[test]
fn text_helpers_round_trip_through_base64() {
    let c = cipher();
    let encoded = c.encrypt_text("héllo wörld");
    assert_eq!(c.decrypt_text(&encoded).unwrap(), "héllo wörld");
}

#[test]
fn different_keys_differ() {
    let other = EcbCipher::new(&BlockKey::derive_from_text("other"));
    assert_ne!(cipher().encrypt(b"same text"), other.encrypt(b"same text"));
}

// ## 2. Decrypt failures

#[test]
fn ciphertext_length_must_be_block_multiple() {
    for len in [1usize, 15, 17, 31] {
        assert!(matches!(
            cipher().decrypt(&vec![0u8; len]),
            Err(CodecError::Decode { .. })
        ));
    }
}

#[test]
fn decrypt_text_rejects_non_base64() {
    assert!(matches!(cipher().decrypt_text("not base64!"), Err(CodecError::Decode { .. })));
}

// ## 3. Padding contract

#[test]
fn pad_adds_length_valued_bytes() {
    assert_eq!(pad_to_block(b"abc").len(), 16);
    assert!(pad_to_block(b"abc")[3..].iter().all(|&b| b == 13));
    assert_eq!(pad_to_block(&[7u8; 16]), vec![7u8; 16]);
    assert!(pad_to_block(b"").is_empty());
}

#[test]
fn lenient_strip_rules() {
    assert_eq!(strip_padding_lenient(vec![9, 9, 3, 3, 3]), vec![9, 9]);
    // claimed pad bytes disagree
    assert_eq!(strip_padding_lenient(vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    // 0 and >16 are never pad lengths
    assert_eq!(strip_padding_lenient(vec![0u8; 16]), vec![0u8; 16]);
    assert_eq!(strip_padding_lenient(vec![17u8; 17]), vec![17u8; 17]);
    // claimed length longer than the data
    assert_eq!(strip_padding_lenient(vec![4, 4, 4]), vec![4, 4, 4]);
    assert_eq!(strip_padding_lenient(vec![16u8; 16]), Vec::<u8>::new());
    assert_eq!(strip_padding_lenient(Vec::new()), Vec::<u8>::new());
}

#[test]
fn aligned_plaintext_ending_like_padding_is_truncated() {
    // No pad block is added for aligned input, so a trailing 0x01 reads as padding.
    let mut pt = b"fifteen bytes!!".to_vec();
    pt.push(0x01);
    assert_eq!(pt.len(), 16);

    let c = cipher();
    let recovered = c.decrypt(&c.encrypt(&pt)).unwrap();
    assert_eq!(recovered, &pt[..15]);
}

// ## 4. Keys

#[test]
fn key_hex_accepts_inline_spaces() {
    let spaced = BlockKey::from_hex("0001 0203 0405 0607 0809 0a0b 0c0d 0e0f").unwrap();
    assert_eq!(spaced, BlockKey::from_hex(KEY_HEX).unwrap());
    assert_eq!(spaced.to_hex(), KEY_HEX);
}

#[test]
fn key_must_be_sixteen_bytes() {
    for bad in ["", "0001", "000102030405060708090a0b0c0d0e0f00", "zz0102030405060708090a0b0c0d0e0f"] {
        assert!(matches!(BlockKey::from_hex(bad), Err(CodecError::Configuration(_))), "{bad:?}");
    }
    assert!(matches!(BlockKey::from_bytes(&[0u8; 15]), Err(CodecError::Configuration(_))));
    assert!(BlockKey::from_bytes(&[0u8; 16]).is_ok());
}

#[test]
fn key_parses_via_from_str() {
    let key: BlockKey = KEY_HEX.parse().unwrap();
    assert_eq!(key.as_bytes()[15], 0x0f);
}

#[test]
fn derived_key_is_md5_of_text() {
    let key = BlockKey::derive_from_text("password");
    assert_eq!(key.to_hex(), "5f4dcc3b5aa765d61d8327deb882cf99");
    assert_eq!(key, BlockKey::derive_from_text("password"));
}

#[test]
fn generated_keys_are_fresh_and_well_formed() {
    let a = BlockKey::generate();
    let b = BlockKey::generate();
    assert_ne!(a, b);
    assert_eq!(BlockKey::from_hex(&a.to_hex()).unwrap(), a);
}

#[test]
fn key_debug_is_redacted() {
    assert_eq!(format!("{:?}", BlockKey::generate()), "BlockKey(..)");
}
