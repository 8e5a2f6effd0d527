use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::EvmError;
use crate::hex::is_hex_string;
use crate::types::Length;

/// A hex-encoded secp256k1 private key (64 characters, no prefix).
///
/// Only the format is checked; the scalar is not compared against the curve
/// order. The string is zeroed when dropped and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Parses a private key, rejecting anything [`is_valid_private_key`]
    /// would reject.
    pub fn parse(key: &str) -> Result<Self, EvmError> {
        if !is_valid_private_key(key) {
            tracing::debug!(len = key.len(), "rejecting malformed private key");
            return Err(EvmError::InvalidPrivateKey(format!(
                "expected {} hex characters",
                Length::PrivateKey.value()
            )));
        }
        Ok(Self(key.to_owned()))
    }

    pub fn is_valid(&self) -> bool {
        is_valid_private_key(&self.0)
    }

    /// Exposes the hex string. Callers are responsible for not leaking it.
    pub fn expose_hex(&self) -> &str {
        &self.0
    }

    /// Decodes the key into its 32 raw bytes.
    pub fn to_bytes(&self) -> Result<Zeroizing<[u8; 32]>, EvmError> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        ::hex::decode_to_slice(&self.0, &mut bytes[..])
            .map_err(|e| EvmError::InvalidPrivateKey(e.to_string()))?;
        Ok(bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Returns `true` iff `key` is exactly 64 characters of `0-9a-fA-F`.
pub fn is_valid_private_key(key: &str) -> bool {
    key.len() == Length::PrivateKey.value() && is_hex_string(key)
}
