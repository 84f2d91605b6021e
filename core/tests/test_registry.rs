// # Registry and configuration

use cryptify_core::codecs::{registry, Codec, CodecKind, DelimiterStyle, Registry};
use cryptify_core::config::{CodecConfig, ConfigError, KeyParsing};

#[test]
fn standard_registry_has_ten_dense_ids() {
    let reg = Registry::standard();
    assert_eq!(reg.len(), 10);
    assert!(!reg.is_empty());

    let names: Vec<&str> = reg.iter().map(|info| info.name).collect();
    assert_eq!(
        names,
        vec![
            "Base64", "Hex", "URL", "Base32", "ROT13", "Caesar", "Atbash", "Substitution",
            "Ascii85", "Seeded XOR",
        ]
    );
    for (expected, info) in reg.iter().enumerate() {
        assert_eq!(info.id as usize, expected);
        assert_eq!(info.codec.kind().id(), info.id);
    }
}

#[test]
fn unknown_ids_are_absent() {
    let reg = Registry::standard();
    assert!(reg.get(10).is_none());
    assert!(reg.get(u16::MAX).is_none());
    assert!(registry::resolve(10).is_none());
}

#[test]
fn standard_parameters() {
    let reg = Registry::standard();
    assert_eq!(reg.get(1).unwrap().codec, Codec::Hex(DelimiterStyle::Space));
    assert_eq!(reg.get(5).unwrap().codec, Codec::Caesar { shift: 3 });
    assert_eq!(registry::resolve(0).unwrap().codec, Codec::Base64);
}

#[test]
fn from_config_applies_parameters() {
    let config = CodecConfig {
        hex_style: DelimiterStyle::Colon,
        caesar_shift: 29,
        key_parsing: KeyParsing::Strict,
    };
    let reg = Registry::from_config(&config);
    assert_eq!(reg.get(1).unwrap().codec, Codec::Hex(DelimiterStyle::Colon));
    assert_eq!(reg.get(5).unwrap().codec, Codec::Caesar { shift: 3 });
}

#[test]
fn from_config_never_registers_auto_hex() {
    let config = CodecConfig { hex_style: DelimiterStyle::Auto, ..Default::default() };
    let reg = Registry::from_config(&config);
    assert_eq!(reg.get(1).unwrap().codec, Codec::Hex(DelimiterStyle::Space));
}

#[test]
fn codec_kind_ids_round_trip() {
    for kind in CodecKind::ALL {
        assert_eq!(CodecKind::try_from(kind.id()).unwrap(), kind);
    }
    assert!(CodecKind::try_from(10u16).is_err());
}

#[test]
fn config_loads_from_json() {
    let config = CodecConfig::from_json_str(
        r#"{ "hex_style": "colon", "caesar_shift": 7, "key_parsing": "lenient" }"#,
    )
    .unwrap();
    assert_eq!(config.hex_style, DelimiterStyle::Colon);
    assert_eq!(config.caesar_shift, 7);
    assert_eq!(config.key_parsing, KeyParsing::Lenient);

    let partial = CodecConfig::from_json_str(r#"{ "caesar_shift": 1 }"#).unwrap();
    assert_eq!(partial.hex_style, DelimiterStyle::Space);
    assert_eq!(partial.key_parsing, KeyParsing::Strict);
}

#[test]
fn config_rejects_bad_documents() {
    assert!(matches!(
        CodecConfig::from_json_str(r#"{ "hex_style": "auto" }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        CodecConfig::from_json_str(r#"{ "caesar_shift": -1 }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(CodecConfig::from_json_str("not json"), Err(ConfigError::Parse(_))));
}
