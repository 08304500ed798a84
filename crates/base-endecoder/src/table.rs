//! Table-driven base64 engine.
//!
//! Encodes three bytes at a time with two lookups into a 4096-entry table of
//! symbol pairs, and decodes through a reverse lookup table. Produces the
//! same output as the bit-packer path for every input.

use std::sync::OnceLock;

use crate::constants::{BASE64, BASE64_URL, PAD};
use crate::BaseXError;

const PAD_BYTE: u8 = PAD as u8;

/// Precomputed lookup tables for one 64-symbol ASCII alphabet.
///
/// # Example
///
/// ```
/// use base_endecoder::Base64Table;
///
/// let table = Base64Table::standard();
/// assert_eq!(table.encode(b"hello", true), "aGVsbG8=");
/// assert_eq!(table.decode("aGVsbG8").unwrap(), b"hello");
/// ```
pub struct Base64Table {
    table: [u8; 64],
    /// Two symbols per entry, first one in the high byte.
    pairs: Box<[u16; 4096]>,
    reverse: [i16; 256],
}

impl Base64Table {
    /// Builds the tables for `chars`.
    ///
    /// # Errors
    ///
    /// `InvalidTableCharset` unless `chars` is 64 ASCII symbols,
    /// `DuplicateSymbol` for repeats, `PaddingInCharset` if `=` is one of
    /// them.
    pub fn new(chars: &str) -> Result<Self, BaseXError> {
        if chars.len() != 64 || !chars.is_ascii() {
            return Err(BaseXError::InvalidTableCharset {
                len: chars.chars().count(),
            });
        }

        let mut table = [0u8; 64];
        let mut reverse = [-1i16; 256];
        for (i, c) in chars.bytes().enumerate() {
            if c == PAD_BYTE {
                return Err(BaseXError::PaddingInCharset { symbol: PAD });
            }
            if reverse[c as usize] >= 0 {
                return Err(BaseXError::DuplicateSymbol { symbol: char::from(c) });
            }
            table[i] = c;
            reverse[c as usize] = i as i16;
        }

        let mut pairs = Box::new([0u16; 4096]);
        for (i, pair) in pairs.iter_mut().enumerate() {
            *pair = (u16::from(table[i >> 6]) << 8) | u16::from(table[i & 0x3f]);
        }

        Ok(Self {
            table,
            pairs,
            reverse,
        })
    }

    /// Tables for the standard alphabet, built on first use.
    pub fn standard() -> &'static Self {
        static TABLE: OnceLock<Base64Table> = OnceLock::new();
        TABLE.get_or_init(|| Self::new(BASE64).expect("standard base64 alphabet is valid"))
    }

    /// Tables for the URL-safe alphabet, built on first use.
    pub fn url() -> &'static Self {
        static TABLE: OnceLock<Base64Table> = OnceLock::new();
        TABLE.get_or_init(|| Self::new(BASE64_URL).expect("base64url alphabet is valid"))
    }

    fn push_pair(&self, out: &mut String, index: usize) {
        let pair = self.pairs[index];
        out.push(char::from((pair >> 8) as u8));
        out.push(char::from(pair as u8));
    }

    /// Encodes `data`, appending `=` up to a multiple of four symbols when
    /// `padding` is set.
    pub fn encode(&self, data: &[u8], padding: bool) -> String {
        let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
        let mut chunks = data.chunks_exact(3);

        for chunk in &mut chunks {
            let (o1, o2, o3) = (chunk[0] as usize, chunk[1] as usize, chunk[2] as usize);
            self.push_pair(&mut out, (o1 << 4) | (o2 >> 4));
            self.push_pair(&mut out, ((o2 & 0b1111) << 8) | o3);
        }

        match *chunks.remainder() {
            [o1] => {
                self.push_pair(&mut out, (o1 as usize) << 4);
                if padding {
                    out.push(PAD);
                    out.push(PAD);
                }
            }
            [o1, o2] => {
                let (o1, o2) = (o1 as usize, o2 as usize);
                self.push_pair(&mut out, (o1 << 4) | (o2 >> 4));
                out.push(char::from(self.table[(o2 & 0b1111) << 2]));
                if padding {
                    out.push(PAD);
                }
            }
            _ => {}
        }

        out
    }

    /// Decodes padded or unpadded input. Like the bit-packer decoder it stops
    /// at the first `=`.
    ///
    /// # Errors
    ///
    /// `InvalidSymbol` for a symbol outside the alphabet, `InvalidLength`
    /// when the last quartet holds a single symbol. Symbols are checked
    /// first, so both engines report the same error for the same input.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, BaseXError> {
        let bytes = text.as_bytes();
        let end = bytes.iter().position(|&b| b == PAD_BYTE).unwrap_or(bytes.len());
        let body = &bytes[..end];

        if let Some(i) = body.iter().position(|&b| self.reverse[b as usize] < 0) {
            return Err(invalid_symbol(text, i));
        }

        let extra = body.len() % 4;
        if extra == 1 {
            return Err(BaseXError::InvalidLength);
        }
        let main_length = body.len() - extra;
        let mut out = Vec::with_capacity(main_length / 4 * 3 + extra.saturating_sub(1));

        let sextet = |i: usize| self.reverse[body[i] as usize] as u8;

        let mut i = 0;
        while i < main_length {
            let (s0, s1, s2, s3) = (sextet(i), sextet(i + 1), sextet(i + 2), sextet(i + 3));
            out.push((s0 << 2) | (s1 >> 4));
            out.push((s1 << 4) | (s2 >> 2));
            out.push((s2 << 6) | s3);
            i += 4;
        }

        if extra >= 2 {
            let (s0, s1) = (sextet(main_length), sextet(main_length + 1));
            out.push((s0 << 2) | (s1 >> 4));
            if extra == 3 {
                let s2 = sextet(main_length + 2);
                out.push((s1 << 4) | (s2 >> 2));
            }
        }

        Ok(out)
    }
}

/// Error for the byte at `index`, reported with its char position. The
/// first bad byte is always a char boundary: the table only holds ASCII,
/// so any multi-byte char fails on its lead byte.
fn invalid_symbol(text: &str, index: usize) -> BaseXError {
    BaseXError::InvalidSymbol {
        symbol: text[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
        position: text[..index].chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc4648_vectors() {
        let table = Base64Table::standard();
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (data, encoded) in vectors {
            assert_eq!(table.encode(data, true), encoded);
            assert_eq!(table.decode(encoded).unwrap(), data);
            assert_eq!(table.decode(encoded.trim_end_matches('=')).unwrap(), data);
        }
    }

    #[test]
    fn url_alphabet() {
        let table = Base64Table::url();
        assert_eq!(table.encode(&[0xfb, 0xff], false), "-_8");
        assert_eq!(table.decode("-_8").unwrap(), [0xfb, 0xff]);
    }

    #[test]
    fn rejects_bad_alphabets() {
        assert_eq!(
            Base64Table::new("abc").err(),
            Some(BaseXError::InvalidTableCharset { len: 3 })
        );
        let with_pad = BASE64.replace('/', "=");
        assert_eq!(
            Base64Table::new(&with_pad).err(),
            Some(BaseXError::PaddingInCharset { symbol: '=' })
        );
        let duplicate = BASE64.replace('/', "+");
        assert_eq!(
            Base64Table::new(&duplicate).err(),
            Some(BaseXError::DuplicateSymbol { symbol: '+' })
        );
    }

    #[test]
    fn decode_errors() {
        let table = Base64Table::standard();
        assert_eq!(table.decode("Zm9vY"), Err(BaseXError::InvalidLength));
        assert_eq!(
            table.decode("Zm9v!!!!"),
            Err(BaseXError::InvalidSymbol {
                symbol: '!',
                position: 4
            })
        );
        assert_eq!(
            table.decode("Zm9ø"),
            Err(BaseXError::InvalidSymbol {
                symbol: 'ø',
                position: 3
            })
        );
        assert_eq!(
            table.decode("Zø9"),
            Err(BaseXError::InvalidSymbol {
                symbol: 'ø',
                position: 1
            })
        );
    }
}
