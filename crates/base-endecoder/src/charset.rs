//! Ordered symbol alphabets with a precomputed reverse lookup.

use std::collections::HashMap;
use std::fmt;

use crate::BaseXError;

const ABSENT: u16 = u16::MAX;

#[derive(Clone)]
enum Index {
    /// Every symbol is below U+0100, so a flat table covers all lookups.
    Latin1(Box<[u16; 256]>),
    Map(HashMap<char, u32>),
}

/// An ordered set of unique symbols. The position of a symbol is its value,
/// the number of symbols is the base.
///
/// Building a `Charset` validates it and computes the symbol → value index
/// once, so reuse one value when converting many numerals with the same
/// alphabet.
///
/// # Example
///
/// ```
/// use base_endecoder::Charset;
///
/// let hex = Charset::new("0123456789ABCDEF").unwrap();
/// assert_eq!(hex.base(), 16);
/// assert_eq!(hex.value_of('C'), Some(12));
/// assert_eq!(hex.value_of('x'), None);
/// ```
#[derive(Clone)]
pub struct Charset {
    symbols: Vec<char>,
    index: Index,
}

impl Charset {
    /// Validates `chars` and builds its lookup index.
    ///
    /// # Errors
    ///
    /// `InvalidCharset` for fewer than two symbols, `DuplicateSymbol` when a
    /// symbol repeats.
    pub fn new(chars: &str) -> Result<Self, BaseXError> {
        let symbols: Vec<char> = chars.chars().collect();
        if symbols.len() < 2 {
            return Err(BaseXError::InvalidCharset { len: symbols.len() });
        }

        let index = if symbols.iter().all(|&c| (c as u32) < 256) {
            let mut table = Box::new([ABSENT; 256]);
            for (i, &c) in symbols.iter().enumerate() {
                let slot = &mut table[c as usize];
                if *slot != ABSENT {
                    return Err(BaseXError::DuplicateSymbol { symbol: c });
                }
                *slot = i as u16;
            }
            Index::Latin1(table)
        } else {
            let mut map = HashMap::with_capacity(symbols.len());
            for (i, &c) in symbols.iter().enumerate() {
                if map.insert(c, i as u32).is_some() {
                    return Err(BaseXError::DuplicateSymbol { symbol: c });
                }
            }
            Index::Map(map)
        };

        Ok(Self { symbols, index })
    }

    /// Number of symbols, i.e. the base.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a valid charset has at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The base as an integer for arithmetic.
    pub fn base(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// The symbols in value order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol for `value`, if `value` is below the base.
    pub fn symbol(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    /// Value of `symbol`, if it belongs to the charset.
    #[inline]
    pub fn value_of(&self, symbol: char) -> Option<u32> {
        match &self.index {
            Index::Latin1(table) => {
                let code = symbol as u32;
                if code >= 256 {
                    return None;
                }
                match table[code as usize] {
                    ABSENT => None,
                    v => Some(u32::from(v)),
                }
            }
            Index::Map(map) => map.get(&symbol).copied(),
        }
    }

    /// Whether `symbol` belongs to the charset.
    pub fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    /// Like [`value_of`](Self::value_of), reporting `position` on failure.
    pub(crate) fn lookup(&self, symbol: char, position: usize) -> Result<u32, BaseXError> {
        self.value_of(symbol)
            .ok_or(BaseXError::InvalidSymbol { symbol, position })
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.to_string()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Charset {}

impl std::str::FromStr for Charset {
    type Err = BaseXError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
