//! base32, base64 and base64url with their standard alphabets and padding.

use std::sync::OnceLock;

use crate::constants::{BASE32, BASE32_GROUP, BASE64, BASE64_GROUP, BASE64_URL, PAD};
use crate::{Alphabet, Base64Table, BaseXError, Padding};

/// Implementation used by the base64 and base64url functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    /// The generic bit-packer codec shared with every other alphabet.
    #[default]
    BitPacker,
    /// Precomputed [`Base64Table`] lookups.
    Table,
}

impl Alphabet {
    /// RFC 4648 base32 alphabet, built on first use.
    pub fn base32() -> &'static Self {
        static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
        ALPHABET.get_or_init(|| Self::new(BASE32).expect("base32 alphabet is valid"))
    }

    /// Standard base64 alphabet, built on first use.
    pub fn base64() -> &'static Self {
        static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
        ALPHABET.get_or_init(|| Self::new(BASE64).expect("base64 alphabet is valid"))
    }

    /// URL-safe base64 alphabet, built on first use.
    pub fn base64url() -> &'static Self {
        static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
        ALPHABET.get_or_init(|| Self::new(BASE64_URL).expect("base64url alphabet is valid"))
    }
}

fn standard_padding(enabled: bool, group_size: usize) -> Option<Padding> {
    enabled.then_some(Padding::new(PAD, group_size))
}

/// Encodes `data` as base32, padded to groups of 8 when `padding` is set.
///
/// # Example
///
/// ```
/// use base_endecoder::{decode_base32, encode_base32};
///
/// assert_eq!(encode_base32(b"foo", true), "MZXW6===");
/// assert_eq!(encode_base32(b"foo", false), "MZXW6");
/// assert_eq!(decode_base32("MZXW6===").unwrap(), b"foo");
/// ```
pub fn encode_base32(data: impl AsRef<[u8]>, padding: bool) -> String {
    Alphabet::base32().render(data.as_ref(), standard_padding(padding, BASE32_GROUP))
}

/// Decodes base32, with or without padding.
pub fn decode_base32(text: &str) -> Result<Vec<u8>, BaseXError> {
    Alphabet::base32().decode(text, Some(PAD))
}

/// Encodes `data` as base64, padded to groups of 4 when `padding` is set.
pub fn encode_base64(data: impl AsRef<[u8]>, padding: bool) -> String {
    encode_base64_with(Engine::BitPacker, data, padding)
}

/// Decodes base64, with or without padding.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, BaseXError> {
    decode_base64_with(Engine::BitPacker, text)
}

/// Encodes `data` as base64url, padded to groups of 4 when `padding` is set.
pub fn encode_base64url(data: impl AsRef<[u8]>, padding: bool) -> String {
    encode_base64url_with(Engine::BitPacker, data, padding)
}

/// Decodes base64url, with or without padding.
pub fn decode_base64url(text: &str) -> Result<Vec<u8>, BaseXError> {
    decode_base64url_with(Engine::BitPacker, text)
}

/// [`encode_base64`] on the chosen engine.
pub fn encode_base64_with(engine: Engine, data: impl AsRef<[u8]>, padding: bool) -> String {
    let data = data.as_ref();
    match engine {
        Engine::BitPacker => Alphabet::base64().render(data, standard_padding(padding, BASE64_GROUP)),
        Engine::Table => Base64Table::standard().encode(data, padding),
    }
}

/// [`decode_base64`] on the chosen engine.
pub fn decode_base64_with(engine: Engine, text: &str) -> Result<Vec<u8>, BaseXError> {
    match engine {
        Engine::BitPacker => Alphabet::base64().decode(text, Some(PAD)),
        Engine::Table => Base64Table::standard().decode(text),
    }
}

/// [`encode_base64url`] on the chosen engine.
pub fn encode_base64url_with(engine: Engine, data: impl AsRef<[u8]>, padding: bool) -> String {
    let data = data.as_ref();
    match engine {
        Engine::BitPacker => Alphabet::base64url().render(data, standard_padding(padding, BASE64_GROUP)),
        Engine::Table => Base64Table::url().encode(data, padding),
    }
}

/// [`decode_base64url`] on the chosen engine.
pub fn decode_base64url_with(engine: Engine, text: &str) -> Result<Vec<u8>, BaseXError> {
    match engine {
        Engine::BitPacker => Alphabet::base64url().decode(text, Some(PAD)),
        Engine::Table => Base64Table::url().decode(text),
    }
}

/// Padded base64 through the table engine.
///
/// # Example
///
/// ```
/// use base_endecoder::{decode_base64_fast, encode_base64_fast};
///
/// let encoded = encode_base64_fast(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// assert_eq!(decode_base64_fast(&encoded).unwrap(), b"hello world");
/// ```
pub fn encode_base64_fast(data: impl AsRef<[u8]>) -> String {
    encode_base64_with(Engine::Table, data, true)
}

/// Base64 decoding through the table engine.
pub fn decode_base64_fast(text: &str) -> Result<Vec<u8>, BaseXError> {
    decode_base64_with(Engine::Table, text)
}
