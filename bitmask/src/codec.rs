//! Text forms of a [`FixedBitVector`]: prefixed binary and hexadecimal strings, the zero-padded
//! bit string, and the parsers behind the format setters.

use std::fmt::{Display, Write};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::FixedBitVector;
use crate::error::{BitMaskError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hexadecimal => 16,
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Hexadecimal => "0x",
        }
    }
}

/// Parses an unsigned integer literal in `radix`.
///
/// Accepts surrounding whitespace, a leading sign, the radix prefix in either case, and single
/// underscores between digits. A minus sign is only accepted on zero.
pub(crate) fn parse(text: &str, radix: Radix) -> Result<BigUint> {
    let rejected = || {
        debug!(text, radix = radix.base(), "rejected malformed digit string");
        BitMaskError::FormatError {
            text: text.to_owned(),
            radix: radix.base(),
        }
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = match strip_prefix_ignore_case(unsigned, radix.prefix()) {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => unsigned,
    };

    let value = parse_digits(digits, radix.base()).ok_or_else(rejected)?;
    if negative && !value.is_zero() {
        return Err(rejected());
    }
    Ok(value)
}

fn strip_prefix_ignore_case<'text>(text: &'text str, prefix: &str) -> Option<&'text str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

fn parse_digits(digits: &str, base: u32) -> Option<BigUint> {
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let values = digits
        .chars()
        .filter(|&c| c != '_')
        .map(|c| c.to_digit(base).map(|digit| digit as u8))
        .collect::<Option<Vec<u8>>>()?;
    BigUint::from_radix_be(&values, base)
}

/// Builds an integer from bits given most significant first.
pub(crate) fn from_msb_first(bits: impl IntoIterator<Item = bool>) -> BigUint {
    bits.into_iter()
        .fold(BigUint::zero(), |value, bit| (value << 1u8) + u8::from(bit))
}

impl FixedBitVector {
    /// Replaces the value with a base-2 string such as `"101101"` or `"0b101101"`.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::FormatError`] for a malformed or negative string and
    /// [`BitMaskError::ValueOutOfRange`] if the parsed value does not fit.
    pub fn set_from_binary_string(&mut self, text: &str) -> Result<()> {
        self.set_from_radix(text, Radix::Binary)
    }

    /// Replaces the value with a base-16 string such as `"A5"` or `"0xa5"`.
    ///
    /// # Errors
    ///
    /// Returns [`BitMaskError::FormatError`] for a malformed or negative string and
    /// [`BitMaskError::ValueOutOfRange`] if the parsed value does not fit.
    pub fn set_from_hex_string(&mut self, text: &str) -> Result<()> {
        self.set_from_radix(text, Radix::Hexadecimal)
    }

    fn set_from_radix(&mut self, text: &str, radix: Radix) -> Result<()> {
        let value = parse(text, radix)?;
        self.value = self.fit_unsigned(value)?;
        Ok(())
    }

    /// The value as `0b…`, without zero padding.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        format!("{:#b}", self.value)
    }

    /// The value as `0x…` in lowercase, without zero padding.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("{:#x}", self.value)
    }

    #[must_use]
    pub fn to_decimal(&self) -> BigUint {
        self.value.clone()
    }

    /// All `capacity` bits, most significant first, without separators.
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        format!("{:0width$b}", self.value, width = self.capacity)
    }

    /// Reverses the bit order end to end, so the bit at position `i` moves to
    /// `capacity - 1 - i`.
    pub fn reverse_bits(&mut self) {
        let printed = self.to_bit_string();
        self.value = from_msb_first(printed.bytes().rev().map(|digit| digit == b'1'));
    }
}

impl Display for FixedBitVector {
    /// Prints every bit, most significant first, separated by spaces. The alternate form
    /// (`{:#}`) omits the separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return f.write_str(&self.to_bit_string());
        }
        for (offset, bit) in self.iter().rev().enumerate() {
            if offset > 0 {
                f.write_char(' ')?;
            }
            f.write_char(if bit == 1 { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for FixedBitVector {
    type Err = BitMaskError;

    /// Parses a string of `0`/`1` digits, most significant first, optionally separated by
    /// whitespace. The capacity is the number of digits.
    fn from_str(text: &str) -> Result<Self> {
        let digits: Vec<u8> = text.split_whitespace().flat_map(str::bytes).collect();
        if digits.is_empty() || digits.iter().any(|digit| !matches!(digit, b'0' | b'1')) {
            debug!(text, "rejected bit string");
            return Err(BitMaskError::FormatError {
                text: text.to_owned(),
                radix: 2,
            });
        }
        let value = from_msb_first(digits.iter().map(|&digit| digit == b'1'));
        FixedBitVector::with_value(digits.len(), value)
    }
}
