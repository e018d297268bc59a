//! The alphanumeric preset: output restricted to `0-9A-Za-z`.

use bootstring::presets::{self, ALPHANUMERIC, ALPHANUMERIC_TUNING};
use bootstring::{Alphabet, Error, Tuning};

const SAMPLES: &[&str] = &[
    "LogicalId01",
    "Some string with CapiTalS, spaces, punctuation_and-stuff \u{1F633}",
    "{\n\t\"stringified\": \"JS object\"\n}",
    "\u{05D0}\u{05E4}\u{05D9}\u{05DC}\u{05D5} \u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA}!",
    "\u{4ED6}\u{4EEC}\u{4E3A}\u{4EC0}\u{4E48}\u{4E0D}\u{8BF4}\u{4E2D}\u{6587}",
    "Pro\u{010D}prost\u{011B}nemluv\u{00ED}\u{010D}esky",
    "3\u{5E74}B\u{7D44}\u{91D1}\u{516B}\u{5148}\u{751F}",
    "\u{5B89}\u{5BA4}\u{5948}\u{7F8E}\u{6075}-with-SUPER-MONKEYS",
    "Maji\u{3067}Koi\u{3059}\u{308B}5\u{79D2}\u{524D}",
    "-> $1.00 <-",
    "\u{0}\u{1}\u{2} control characters",
    "XXX",
];

fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[test]
fn test_roundtrip_samples() {
    for &original in SAMPLES {
        let encoded = ALPHANUMERIC
            .encode(original)
            .unwrap_or_else(|e| panic!("encode failed for {:?}: {}", original, e));
        assert!(
            is_alphanumeric(&encoded),
            "encode({:?}) = {:?} is not alphanumeric",
            original,
            encoded
        );
        let decoded = ALPHANUMERIC
            .decode(&encoded)
            .unwrap_or_else(|e| panic!("decode failed for {:?}: {}", encoded, e));
        assert_eq!(decoded, original, "roundtrip failed (encoded: {})", encoded);
    }
}

#[test]
fn test_alphanumeric_input_gains_delimiter() {
    assert_eq!(ALPHANUMERIC.encode("LogicalId01").unwrap(), "LogicalId01X");
    assert_eq!(ALPHANUMERIC.decode("LogicalId01X").unwrap(), "LogicalId01");
}

#[test]
fn test_basic_characters_lead_the_output() {
    let encoded = ALPHANUMERIC.encode("-> $1.00 <-").unwrap();
    assert!(encoded.starts_with("100X"), "got {}", encoded);

    let encoded = ALPHANUMERIC
        .encode("\u{5B89}\u{5BA4}\u{5948}\u{7F8E}\u{6075}-with-SUPER-MONKEYS")
        .unwrap();
    assert!(encoded.starts_with("withSUPERMONKEYSX"), "got {}", encoded);
}

#[test]
fn test_no_basic_characters_means_no_delimiter_prefix() {
    let encoded = ALPHANUMERIC.encode("\u{4ED6}\u{4EEC}").unwrap();
    assert!(is_alphanumeric(&encoded));
    assert!(!encoded.contains('X'));
}

#[test]
fn test_delimiter_is_not_a_digit() {
    assert!(!ALPHANUMERIC.digits().is_digit('X'));
    assert_eq!(ALPHANUMERIC.digits().base(), 61);
    assert_eq!(ALPHANUMERIC.decode("abcX").unwrap(), "abc");
}

#[test]
fn test_non_alphanumeric_decode_input_is_rejected() {
    // '-' lies in the extended alphabet, but not in the basic one.
    assert!(matches!(
        ALPHANUMERIC.decode("ab-cX"),
        Err(Error::InvalidFormat(_))
    ));
    assert!(matches!(ALPHANUMERIC.decode("ab-"), Err(Error::InvalidFormat(_))));
}

#[test]
fn test_basic_alphabet_bijection() {
    let basic = ALPHANUMERIC.basic();
    for (i, c) in basic.chars().enumerate() {
        assert_eq!(basic.index_of(c).unwrap(), i as u32);
        assert_eq!(ALPHANUMERIC.extended().index_of(c).unwrap(), i as u32);
    }
    assert_eq!(basic.index_of('-'), Err(Error::UnknownCharacter('-')));
}

#[test]
fn test_custom_tuning_roundtrip() {
    let codec = presets::alphanumeric_with(Tuning {
        tmax: 60,
        initial_bias: 0,
        ..ALPHANUMERIC_TUNING
    })
    .unwrap();
    for &original in SAMPLES {
        let encoded = codec.encode(original).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), original);
    }
}

#[test]
fn test_invalid_custom_tuning() {
    let result = presets::alphanumeric_with(Tuning {
        tmax: 61,
        ..ALPHANUMERIC_TUNING
    });
    assert!(matches!(result, Err(Error::Configuration { .. })));
}
