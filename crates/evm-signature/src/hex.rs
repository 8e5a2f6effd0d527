//! Hex strings and fixed-width ABI word padding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvmError;
use crate::types::Length;

/// Prefix of a hex-encoded value.
pub const HEX_PREFIX: &str = "0x";

/// A hex-encoded string, with or without the `0x` prefix.
///
/// No validity guarantee is attached to the value; use [`Hex::is_hex`] or
/// [`Hex::decode`] where it matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hex(String);

impl Hex {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the digits after an optional `0x`/`0X` prefix.
    pub fn digits(&self) -> &str {
        strip_hex_prefix(&self.0)
    }

    /// Returns `true` if every character after the optional prefix is a hex
    /// digit.
    pub fn is_hex(&self) -> bool {
        is_hex_string(self.digits())
    }

    /// Appends `other` verbatim, as done when building call data.
    pub fn concat(&self, other: &Hex) -> Hex {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(&self.0);
        out.push_str(&other.0);
        Hex(out)
    }

    /// Decodes the digits into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EvmError> {
        ::hex::decode(self.digits()).map_err(|e| EvmError::InvalidHex(e.to_string()))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Hex {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Hex {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `c` is `0-9`, `a-f` or `A-F`.
pub fn is_hex_character(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

pub(crate) fn is_hex_string(s: &str) -> bool {
    s.bytes().all(is_hex_character)
}

pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX)
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Left-pads a hex numeral with `0` up to one ABI word (64 characters).
///
/// Values already 64 characters or longer are returned unchanged.
pub fn create_hex_string_fixed_length(value: &str) -> Hex {
    Hex(pad_left(value, '0', Length::OneBlockInputValue.value()))
}

pub(crate) fn pad_left(value: &str, fill: char, width: usize) -> String {
    let missing = width.saturating_sub(value.len());
    let mut out = String::with_capacity(missing + value.len());
    out.extend(std::iter::repeat(fill).take(missing));
    out.push_str(value);
    out
}
