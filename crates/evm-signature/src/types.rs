use serde::{Deserialize, Serialize};

use crate::error::EvmError;

/// Fixed lengths, in hex characters, of the elements handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// 32-byte private key.
    PrivateKey,
    /// One 32-byte ABI word of call data.
    OneBlockInputValue,
    /// 65-byte `r || s || v` signature, without prefix.
    TwoBlockInputSignature,
    /// 20-byte address, without prefix.
    Address,
    /// The `0x` prefix.
    HexPrefix,
}

impl Length {
    pub const fn value(self) -> usize {
        match self {
            Length::PrivateKey => 64,
            Length::OneBlockInputValue => 64,
            Length::TwoBlockInputSignature => 130,
            Length::Address => 40,
            Length::HexPrefix => 2,
        }
    }
}

/// Signature recovery identifier `v`.
///
/// Raw recovery ids are `0`/`1`; legacy (pre-EIP-155) signatures carry
/// them offset by 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrivateKeyV {
    Zero = 0,
    One = 1,
    TwentySeven = 27,
    TwentyEight = 28,
}

impl PrivateKeyV {
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Maps a raw recovery id onto its legacy `27`/`28` form.
    pub const fn to_legacy(self) -> PrivateKeyV {
        match self {
            PrivateKeyV::Zero | PrivateKeyV::TwentySeven => PrivateKeyV::TwentySeven,
            PrivateKeyV::One | PrivateKeyV::TwentyEight => PrivateKeyV::TwentyEight,
        }
    }
}

impl TryFrom<u8> for PrivateKeyV {
    type Error = EvmError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PrivateKeyV::Zero),
            1 => Ok(PrivateKeyV::One),
            27 => Ok(PrivateKeyV::TwentySeven),
            28 => Ok(PrivateKeyV::TwentyEight),
            other => Err(EvmError::InvalidValue(format!(
                "recovery id must be 0, 1, 27 or 28, got {other}"
            ))),
        }
    }
}

/// Block selector for JSON-RPC queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
}

impl BlockTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
        }
    }
}
