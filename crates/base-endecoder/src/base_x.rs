//! Binary data to and from any power-of-two base.
//!
//! Each symbol of a base with `2^n` symbols carries exactly `n` bits, so
//! bytes are regrouped into `n`-bit values by a [`BitPacker`] and every
//! value is written as a one-symbol numeral of the charset.

use std::iter;

use crate::bit_packer::{BitPacker, Repack, Tail};
use crate::{BaseXError, Charset};

/// Largest charset usable for binary data, so a symbol carries at most
/// 8 bits and the zero fill of the last symbol never adds up to a byte.
pub const MAX_ALPHABET_LEN: usize = 256;

/// Padding appended to encoded output so its length (in symbols) becomes
/// a multiple of `group_size`. A `group_size` of 0 disables padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub symbol: char,
    pub group_size: usize,
}

impl Padding {
    /// Pads with `symbol` to a multiple of `group_size` symbols.
    pub const fn new(symbol: char, group_size: usize) -> Self {
        Self { symbol, group_size }
    }

    /// Number of padding symbols needed after `len` symbols.
    pub fn fill(&self, len: usize) -> usize {
        match self.group_size {
            0 => 0,
            g => (g - len % g) % g,
        }
    }
}

/// A charset whose length is a power of two, ready to encode binary data.
///
/// # Example
///
/// ```
/// use base_endecoder::{Alphabet, Padding};
///
/// let hex = Alphabet::new("0123456789abcdef").unwrap();
/// assert_eq!(hex.bits_per_symbol(), 4);
/// assert_eq!(hex.encode([0x01u8, 0xff], None).unwrap(), "01ff");
/// assert_eq!(hex.decode("01ff", None).unwrap(), [0x01, 0xff]);
///
/// let padded = hex.encode([0xabu8], Some(Padding::new('.', 4))).unwrap();
/// assert_eq!(padded, "ab..");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    charset: Charset,
    /// Empty packer of width `log2(len)`; every encode works on a clone.
    packer: BitPacker,
}

impl Alphabet {
    /// Builds and validates an alphabet from its symbols.
    ///
    /// # Errors
    ///
    /// Everything [`Charset::new`] and [`from_charset`](Self::from_charset)
    /// reject.
    pub fn new(chars: &str) -> Result<Self, BaseXError> {
        Self::from_charset(Charset::new(chars)?)
    }

    /// Builds an alphabet from an already validated charset.
    ///
    /// # Errors
    ///
    /// `NonPowerOfTwoCharset` carrying the nearest valid lengths below and
    /// above, `AlphabetTooLarge` for more than [`MAX_ALPHABET_LEN`] symbols.
    pub fn from_charset(charset: Charset) -> Result<Self, BaseXError> {
        let len = charset.len();
        if len > MAX_ALPHABET_LEN {
            return Err(BaseXError::AlphabetTooLarge {
                len,
                max: MAX_ALPHABET_LEN,
            });
        }
        if !len.is_power_of_two() {
            let ceil = len.next_power_of_two();
            return Err(BaseXError::NonPowerOfTwoCharset {
                len,
                floor: ceil >> 1,
                ceil,
            });
        }
        Ok(Self {
            charset,
            packer: BitPacker::new(len.trailing_zeros())?,
        })
    }

    /// The underlying charset.
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Bits carried by each symbol, 1..=8.
    pub fn bits_per_symbol(&self) -> u32 {
        self.packer.width()
    }

    /// Encodes `data`, optionally padding the output.
    ///
    /// # Errors
    ///
    /// `PaddingInCharset` when the padding symbol is one of the alphabet's
    /// symbols.
    pub fn encode(&self, data: impl AsRef<[u8]>, padding: Option<Padding>) -> Result<String, BaseXError> {
        if let Some(padding) = padding {
            self.check_padding(padding.symbol)?;
        }
        Ok(self.render(data.as_ref(), padding))
    }

    /// Decodes `text`. Decoding stops at the first `padding` symbol and
    /// ignores everything after it. Bits that do not fill a whole byte at
    /// the end are dropped.
    ///
    /// # Errors
    ///
    /// `InvalidSymbol` for a symbol outside the alphabet before the
    /// padding, `PaddingInCharset` as for [`encode`](Self::encode).
    pub fn decode(&self, text: &str, padding: Option<char>) -> Result<Vec<u8>, BaseXError> {
        if let Some(symbol) = padding {
            self.check_padding(symbol)?;
        }
        let bits = self.bits_per_symbol();
        let mut packer = BitPacker::new(8)?;
        let mut out = Vec::with_capacity(text.len() * bits as usize / 8);
        for (position, symbol) in text.chars().enumerate() {
            if Some(symbol) == padding {
                break;
            }
            let value = self.charset.lookup(symbol, position)?;
            packer.consume(value, bits, |byte| out.push(byte as u8))?;
        }
        Ok(out)
    }

    /// Encoding once the padding symbol is known not to clash.
    pub(crate) fn render(&self, data: &[u8], padding: Option<Padding>) -> String {
        let bits = self.bits_per_symbol() as usize;
        let symbols = (data.len() * 8).div_ceil(bits);
        let fill = padding.map_or(0, |p| p.fill(symbols));
        let mut out = String::with_capacity(symbols + fill);

        let values = data.iter().map(|&byte| u32::from(byte));
        for value in Repack::from_packer(values, 8, self.packer.clone(), Tail::Flush) {
            self.charset.push_numeral(u64::from(value), &mut out);
        }
        if let Some(padding) = padding {
            out.extend(iter::repeat(padding.symbol).take(fill));
        }
        out
    }

    fn check_padding(&self, symbol: char) -> Result<(), BaseXError> {
        if self.charset.contains(symbol) {
            return Err(BaseXError::PaddingInCharset { symbol });
        }
        Ok(())
    }
}

/// Encodes binary data in the base defined by `charset`, whose length must
/// be a power of two.
///
/// # Example
///
/// ```
/// use base_endecoder::{decode_base_x, encode_base_x};
///
/// let text = encode_base_x("Hello strange world!", "ÆØÅX", None).unwrap();
/// assert_eq!(text.chars().count(), 80);
/// assert_eq!(decode_base_x(&text, "ÆØÅX", None).unwrap(), b"Hello strange world!");
/// ```
pub fn encode_base_x(
    data: impl AsRef<[u8]>,
    charset: &str,
    padding: Option<Padding>,
) -> Result<String, BaseXError> {
    Alphabet::new(charset)?.encode(data, padding)
}

/// Decodes a string in the base defined by `charset` back into bytes. See
/// [`Alphabet::decode`].
pub fn decode_base_x(text: &str, charset: &str, padding: Option<char>) -> Result<Vec<u8>, BaseXError> {
    Alphabet::new(charset)?.decode(text, padding)
}
