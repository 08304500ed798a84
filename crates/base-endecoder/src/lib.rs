//! Number and binary-data conversion to and from any base.
//!
//! This crate provides:
//! - base 10 ↔ base X numeral conversion for any charset of two or more symbols
//! - binary data ↔ base X strings for any charset whose length is a power of two
//! - base32, base64 and base64url with standard padding
//! - a table-driven base64 engine selectable per call
//!
//! # Example
//!
//! ```
//! use base_endecoder::{decode_base64, encode_base64, x_from_base10, x_to_base10};
//!
//! let strange = x_from_base10(123456, "ÆØÅX").unwrap();
//! assert_eq!(x_to_base10(&strange, "ÆØÅX").unwrap(), 123456);
//!
//! let encoded = encode_base64(b"hello world", true);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode_base64(&encoded).unwrap(), b"hello world");
//! ```

mod base_x;
mod bit_packer;
mod charset;
mod constants;
mod error;
mod named;
mod numeral;
mod table;

pub use base_x::{decode_base_x, encode_base_x, Alphabet, Padding, MAX_ALPHABET_LEN};
pub use bit_packer::{BitPacker, Repack, Tail, MAX_WIDTH};
pub use charset::Charset;
pub use constants::{BASE32, BASE32_GROUP, BASE64, BASE64_GROUP, BASE64_URL, PAD};
pub use error::BaseXError;
pub use named::{
    decode_base32, decode_base64, decode_base64_fast, decode_base64_with, decode_base64url,
    decode_base64url_with, encode_base32, encode_base64, encode_base64_fast, encode_base64_with,
    encode_base64url, encode_base64url_with, Engine,
};
pub use numeral::{x_from_base10, x_to_base10};
pub use table::Base64Table;
