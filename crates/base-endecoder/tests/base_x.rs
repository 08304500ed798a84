//! Tests for binary data ↔ base X strings with arbitrary alphabets.

use base_endecoder::{
    decode_base_x, encode_base_x, Alphabet, BaseXError, Charset, Padding, MAX_ALPHABET_LEN,
};
use base_endecoder_util::Fuzzer;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works_for_every_power_of_two_width() {
    let fuzzer = Fuzzer::new(None);
    for _ in 0..40 {
        let charset = fuzzer.random_power_of_two_charset(8);
        let bits = charset.chars().count().trailing_zeros() as usize;
        for _ in 0..20 {
            let blob = generate_blob();
            let encoded = encode_base_x(&blob, &charset, None).unwrap();
            assert_eq!(encoded.chars().count(), (blob.len() * 8).div_ceil(bits));
            let decoded = decode_base_x(&encoded, &charset, None).unwrap();
            assert_eq!(decoded, blob, "seed={:?} charset={charset}", fuzzer.seed);
        }
    }
}

#[test]
fn largest_alphabet_round_trips() {
    let fuzzer = Fuzzer::new(None);
    let charset = fuzzer.random_charset(256);
    let alphabet = Alphabet::new(&charset).unwrap();
    assert_eq!(alphabet.bits_per_symbol(), 8);
    for _ in 0..20 {
        let blob = generate_blob();
        let encoded = alphabet.encode(&blob, None).unwrap();
        assert_eq!(encoded.chars().count(), blob.len());
        assert_eq!(alphabet.decode(&encoded, None).unwrap(), blob);
    }
}

#[test]
fn alphabets_wider_than_a_byte_are_rejected() {
    // 512 symbols would need 9 bits each; encoding two bytes as two
    // 9-bit symbols would decode back with a trailing zero byte.
    let wide: String = ('\u{4e00}'..).take(512).collect();
    let expected = BaseXError::AlphabetTooLarge { len: 512, max: 256 };
    assert_eq!(encode_base_x([0xabu8, 0xcd], &wide, None), Err(expected.clone()));
    assert_eq!(decode_base_x("", &wide, None), Err(expected));

    let wider: String = ('\u{4e00}'..).take(4096).collect();
    assert_eq!(
        Alphabet::new(&wider).unwrap_err(),
        BaseXError::AlphabetTooLarge { len: 4096, max: MAX_ALPHABET_LEN }
    );
    // The size limit is checked before the power-of-two rule.
    let odd: String = ('\u{4e00}'..).take(300).collect();
    assert_eq!(
        Alphabet::new(&odd).unwrap_err(),
        BaseXError::AlphabetTooLarge { len: 300, max: 256 }
    );
}

#[test]
fn empty_input() {
    for charset in ["01", "ÆØÅX", "0123456789abcdef"] {
        assert_eq!(encode_base_x([0u8; 0], charset, None).unwrap(), "");
        assert_eq!(
            encode_base_x(Vec::<u8>::new(), charset, Some(Padding::new('=', 8))).unwrap(),
            ""
        );
        assert_eq!(decode_base_x("", charset, None).unwrap(), b"");
        assert_eq!(decode_base_x("", charset, Some('=')).unwrap(), b"");
    }
}

#[test]
fn binary_and_hex() {
    assert_eq!(encode_base_x([0xa5u8], "01", None).unwrap(), "10100101");
    assert_eq!(
        encode_base_x(b"\x00\x01\xfe\xff", "0123456789ABCDEF", None).unwrap(),
        "0001FEFF"
    );
    assert_eq!(
        decode_base_x("0001FEFF", "0123456789ABCDEF", None).unwrap(),
        [0x00, 0x01, 0xfe, 0xff]
    );
}

#[test]
fn leading_zero_symbols_are_kept() {
    let encoded = encode_base_x([0u8, 0, 1], "0123456789abcdef", None).unwrap();
    assert_eq!(encoded, "000001");
}

#[test]
fn non_power_of_two_is_rejected() {
    let cases = [("abc", 3, 2, 4), ("abcdef", 6, 4, 8), ("0123456789", 10, 8, 16)];
    for (charset, len, floor, ceil) in cases {
        let expected = BaseXError::NonPowerOfTwoCharset { len, floor, ceil };
        assert_eq!(encode_base_x(b"data", charset, None), Err(expected.clone()));
        assert_eq!(decode_base_x("abc", charset, None), Err(expected));
    }

    let message = Alphabet::new("abc").unwrap_err().to_string();
    assert!(message.contains("decrease the charset length to 2 or increase it to 4"));
}

#[test]
fn invalid_charsets_are_rejected_first() {
    assert_eq!(
        encode_base_x(b"data", "a", None),
        Err(BaseXError::InvalidCharset { len: 1 })
    );
    assert_eq!(
        decode_base_x("", "", None),
        Err(BaseXError::InvalidCharset { len: 0 })
    );
}

#[test]
fn padding_aligns_to_group_size() {
    let hex = Alphabet::new("0123456789abcdef").unwrap();
    let pad = |group_size| Some(Padding::new('=', group_size));

    assert_eq!(hex.encode([0x12u8], pad(4)).unwrap(), "12==");
    assert_eq!(hex.encode([0x12u8, 0x34], pad(4)).unwrap(), "1234");
    assert_eq!(hex.encode([0x12u8], pad(3)).unwrap(), "12=");
    assert_eq!(hex.encode([0x12u8], pad(1)).unwrap(), "12");
    assert_eq!(hex.encode([0x12u8], pad(0)).unwrap(), "12");
}

#[test]
fn padding_is_idempotent() {
    let alphabet = Alphabet::new("ÆØÅX").unwrap();
    let padding = Some(Padding::new('-', 7));
    for _ in 0..20 {
        let blob = generate_blob();
        let first = alphabet.encode(&blob, padding).unwrap();
        let second = alphabet.encode(&blob, padding).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.chars().count() % 7, 0);
        assert_eq!(alphabet.decode(&first, Some('-')).unwrap(), blob);
    }
}

#[test]
fn decode_stops_at_first_padding_symbol() {
    let hex = "0123456789abcdef";
    assert_eq!(decode_base_x("ab=cd", hex, Some('=')).unwrap(), [0xab]);
    assert_eq!(decode_base_x("ab==zz!!", hex, Some('=')).unwrap(), [0xab]);
    assert_eq!(decode_base_x("=abcd", hex, Some('=')).unwrap(), b"");
}

#[test]
fn dangling_bits_are_dropped() {
    // Three hex digits are 12 bits: one byte plus four dangling bits.
    assert_eq!(
        decode_base_x("abc", "0123456789abcdef", None).unwrap(),
        [0xab]
    );
    // Seven bits never make a byte.
    assert_eq!(decode_base_x("1111111", "01", None).unwrap(), b"");
}

#[test]
fn unknown_symbols_are_rejected() {
    assert_eq!(
        decode_base_x("ÆØ?X", "ÆØÅX", None),
        Err(BaseXError::InvalidSymbol {
            symbol: '?',
            position: 2
        })
    );
    // Without a padding symbol, '=' is just another unknown symbol.
    assert_eq!(
        decode_base_x("ab==", "0123456789abcdef", None),
        Err(BaseXError::InvalidSymbol {
            symbol: '=',
            position: 2
        })
    );
}

#[test]
fn padding_symbol_must_not_be_in_charset() {
    let hex = Alphabet::new("0123456789abcdef").unwrap();
    assert_eq!(
        hex.encode(b"x", Some(Padding::new('a', 4))),
        Err(BaseXError::PaddingInCharset { symbol: 'a' })
    );
    assert_eq!(
        hex.decode("ab", Some('0')),
        Err(BaseXError::PaddingInCharset { symbol: '0' })
    );
}

#[test]
fn alphabet_exposes_its_charset() {
    let charset = Charset::new("ÆØÅX").unwrap();
    let alphabet = Alphabet::from_charset(charset.clone()).unwrap();
    assert_eq!(alphabet.charset(), &charset);
    assert_eq!(alphabet.bits_per_symbol(), 2);
}

#[test]
fn accepts_any_byte_view() {
    let hex = "0123456789abcdef";
    let expected = "6869";
    assert_eq!(encode_base_x("hi", hex, None).unwrap(), expected);
    assert_eq!(encode_base_x(String::from("hi"), hex, None).unwrap(), expected);
    assert_eq!(encode_base_x(b"hi", hex, None).unwrap(), expected);
    assert_eq!(encode_base_x(vec![0x68u8, 0x69], hex, None).unwrap(), expected);
    assert_eq!(encode_base_x(&[0x68u8, 0x69][..], hex, None).unwrap(), expected);
}
