//! Conversion of non-negative integers between base 10 and any charset.
//!
//! Values are `u64`. A numeral whose value does not fit is reported as
//! [`BaseXError::NumeralOverflow`] rather than wrapped or rounded.

use crate::{BaseXError, Charset};

/// Digits of `u64::MAX` in base 2, the longest possible numeral.
const MAX_DIGITS: usize = 64;

impl Charset {
    /// Parses a numeral written in this charset, most significant symbol
    /// first. The empty numeral is 0.
    ///
    /// # Errors
    ///
    /// `InvalidSymbol` for a symbol outside the charset, `NumeralOverflow`
    /// when the value exceeds `u64::MAX`.
    pub fn to_base10(&self, numeral: &str) -> Result<u64, BaseXError> {
        let base = self.base();
        numeral
            .chars()
            .enumerate()
            .try_fold(0u64, |acc, (position, symbol)| {
                let digit = u64::from(self.lookup(symbol, position)?);
                acc.checked_mul(base)
                    .and_then(|acc| acc.checked_add(digit))
                    .ok_or(BaseXError::NumeralOverflow)
            })
    }

    /// Writes `value` as a numeral in this charset. Zero is the charset's
    /// first symbol.
    pub fn from_base10(&self, value: u64) -> String {
        let mut out = String::new();
        self.push_numeral(value, &mut out);
        out
    }

    pub(crate) fn push_numeral(&self, mut value: u64, out: &mut String) {
        let base = self.base();
        let symbols = self.symbols();
        let mut digits = ['\0'; MAX_DIGITS];
        let mut n = 0;
        loop {
            digits[n] = symbols[(value % base) as usize];
            n += 1;
            value /= base;
            if value == 0 {
                break;
            }
        }
        out.extend(digits[..n].iter().rev());
    }
}

/// Converts a numeral in the base defined by `charset` to base 10.
///
/// # Example
///
/// ```
/// use base_endecoder::x_to_base10;
///
/// assert_eq!(x_to_base10("ff", "0123456789abcdef").unwrap(), 255);
/// assert_eq!(x_to_base10("", "01").unwrap(), 0);
/// ```
pub fn x_to_base10(numeral: &str, charset: &str) -> Result<u64, BaseXError> {
    Charset::new(charset)?.to_base10(numeral)
}

/// Converts a base 10 value to a numeral in the base defined by `charset`.
///
/// # Example
///
/// ```
/// use base_endecoder::x_from_base10;
///
/// assert_eq!(x_from_base10(5, "01").unwrap(), "101");
/// assert_eq!(x_from_base10(0, "ÆØÅX").unwrap(), "Æ");
/// ```
pub fn x_from_base10(value: u64, charset: &str) -> Result<String, BaseXError> {
    Ok(Charset::new(charset)?.from_base10(value))
}
