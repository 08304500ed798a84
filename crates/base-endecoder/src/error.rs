//! Error type shared by every conversion in the crate.

use thiserror::Error;

/// Error type for numeral and binary-data conversions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BaseXError {
    /// A charset needs at least two symbols to define a base.
    #[error("invalid charset for base conversion: {len} symbol(s), at least 2 are needed")]
    InvalidCharset { len: usize },

    /// The same symbol occurs twice in a charset.
    #[error("symbol {symbol:?} occurs more than once in the charset")]
    DuplicateSymbol { symbol: char },

    /// Binary data can only be mapped onto a base that is a power of two.
    #[error(
        "the base (charset length {len}) has to be a power of two to convert binary data; \
         decrease the charset length to {floor} or increase it to {ceil}"
    )]
    NonPowerOfTwoCharset { len: usize, floor: usize, ceil: usize },

    /// Binary data needs at most 8 bits per symbol.
    #[error("charset length {len} is too large to convert binary data; at most {max} symbols are supported")]
    AlphabetTooLarge { len: usize, max: usize },

    /// The input contains a symbol that the charset does not define.
    #[error("symbol {symbol:?} at position {position} is not part of the charset")]
    InvalidSymbol { symbol: char, position: usize },

    /// The numeral's value does not fit in a `u64`.
    #[error("numeral exceeds the range of u64")]
    NumeralOverflow,

    /// Bit widths are limited to 1..=32.
    #[error("bit width {width} is outside 1..=32")]
    InvalidBitWidth { width: u32 },

    /// The padding symbol must not be a charset symbol.
    #[error("padding symbol {symbol:?} is also a charset symbol")]
    PaddingInCharset { symbol: char },

    /// Table engines need a 64-symbol ASCII alphabet.
    #[error("a base64 table needs 64 unique ASCII symbols, got {len} symbol(s)")]
    InvalidTableCharset { len: usize },

    /// A base64 string whose last quartet holds a single symbol.
    #[error("base64 input has a dangling symbol in its last quartet")]
    InvalidLength,
}
