use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::EvmError;
use crate::hex::{is_hex_string, strip_hex_prefix, Hex, HEX_PREFIX};
use crate::types::Length;

/// A `0x`-prefixed 20-byte Ethereum address.
///
/// Construction validates the format (prefix + 40 hex characters). The
/// original casing is kept; equality and hashing ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses and validates an address string.
    pub fn parse(address: &str) -> Result<Self, EvmError> {
        is_valid_address(address)?;
        Ok(Self(address.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the held value. Always succeeds for values built through
    /// [`Address::parse`].
    pub fn is_valid(&self) -> Result<(), EvmError> {
        is_valid_address(&self.0)
    }

    /// Returns the 20 raw address bytes.
    pub fn to_bytes(&self) -> Result<[u8; 20], EvmError> {
        let mut bytes = [0u8; 20];
        ::hex::decode_to_slice(strip_hex_prefix(&self.0), &mut bytes)
            .map_err(|e| EvmError::InvalidAddress(format!("invalid hex: {e}")))?;
        Ok(bytes)
    }

    /// Returns the address in EIP-55 mixed-case checksum form.
    pub fn to_checksum(&self) -> String {
        checksum_hex(&strip_hex_prefix(&self.0).to_ascii_lowercase())
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = EvmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = EvmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        is_valid_address(&value)?;
        Ok(Self(value))
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// Builds an address from one 32-byte ABI word, keeping its trailing
/// 20 bytes.
///
/// The word must be 64 hex characters, optionally `0x`-prefixed, as found in
/// call data or event topics.
pub fn create_valid_address(word: &Hex) -> Result<Address, EvmError> {
    let digits = word.digits();
    let word_len = Length::OneBlockInputValue.value();

    if digits.len() != word_len {
        tracing::debug!(len = digits.len(), "rejecting address word of wrong length");
        return Err(EvmError::InvalidAddress(format!(
            "expected a {word_len}-character word, got {}",
            digits.len()
        )));
    }

    if !is_hex_string(digits) {
        return Err(EvmError::InvalidAddress(
            "word contains non-hex characters".into(),
        ));
    }

    let tail = &digits[word_len - Length::Address.value()..];
    Ok(Address(format!("{HEX_PREFIX}{tail}")))
}

/// Validates an Ethereum address string.
///
/// The address must be `0x` (or `0X`) followed by exactly 40 hex
/// characters. Case is not checked against the EIP-55 checksum.
pub fn is_valid_address(address: &str) -> Result<(), EvmError> {
    let Some(hex_part) = address
        .strip_prefix(HEX_PREFIX)
        .or_else(|| address.strip_prefix("0X"))
    else {
        tracing::debug!("rejecting address without 0x prefix");
        return Err(EvmError::InvalidAddress(
            "address must start with 0x".into(),
        ));
    };

    if hex_part.len() != Length::Address.value() {
        tracing::debug!(len = hex_part.len(), "rejecting address of wrong length");
        return Err(EvmError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !is_hex_string(hex_part) {
        tracing::debug!("rejecting address with non-hex characters");
        return Err(EvmError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    Ok(())
}

/// EIP-55 encoding of 40 lowercase hex characters.
fn checksum_hex(lower: &str) -> String {
    // EIP-55: hash the lowercase hex address (without 0x).
    let hash = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str(HEX_PREFIX);

    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}
