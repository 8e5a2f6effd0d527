//! Call data for token-id based contract methods.
//!
//! The payload is `selector || word(token_id)`, with the token id rendered as
//! a single 32-byte ABI word in lowercase hex.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::hex::{create_hex_string_fixed_length, pad_left, Hex};
use crate::types::Length;

/// Values for the data field of a contract-call transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    /// Method selector, typically 4 bytes of hex.
    pub address_contract_method: Hex,
    pub token_id: i64,
}

impl Data {
    pub fn new(address_contract_method: impl Into<Hex>, token_id: i64) -> Self {
        Self {
            address_contract_method: address_contract_method.into(),
            token_id,
        }
    }

    pub fn to_hex(&self) -> Hex {
        new_data_hex(self)
    }
}

/// Encodes `data` as `selector || word(token_id)`.
///
/// Non-negative ids are zero-padded to 64 characters. Negative ids are
/// sign-extended with `f`, matching the ABI encoding of `int256`.
pub fn new_data_hex(data: &Data) -> Hex {
    let token_id = if data.token_id < 0 {
        // `{:x}` on i64 yields the 16-digit two's complement.
        Hex::new(pad_left(
            &format!("{:x}", data.token_id),
            'f',
            Length::OneBlockInputValue.value(),
        ))
    } else {
        create_hex_string_fixed_length(&format!("{:x}", data.token_id))
    };

    data.address_contract_method.concat(&token_id)
}

/// A contract address together with the selector of the method to call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub address: Address,
    pub address_method: Hex,
}

impl Contract {
    pub fn new(address: Address, address_method: impl Into<Hex>) -> Self {
        Self {
            address,
            address_method: address_method.into(),
        }
    }

    /// Builds the call data for invoking this contract's method on `token_id`.
    pub fn call_data(&self, token_id: i64) -> Hex {
        new_data_hex(&Data {
            address_contract_method: self.address_method.clone(),
            token_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_hex_token_one() {
        let hex = new_data_hex(&Data::new("abcd", 1));
        assert_eq!(hex.as_str(), format!("abcd{}1", "0".repeat(63)));
    }

    #[test]
    fn data_hex_token_zero() {
        let hex = new_data_hex(&Data::new("abcd", 0));
        assert_eq!(hex.as_str(), format!("abcd{}", "0".repeat(64)));
    }

    #[test]
    fn data_hex_is_lowercase() {
        let hex = Data::new("0x6352211e", 0xABCDEF).to_hex();
        assert!(hex.as_str().ends_with("abcdef"));
        assert_eq!(hex.len(), 10 + 64);
    }

    #[test]
    fn data_hex_max_token_id() {
        let hex = Data::new("", i64::MAX).to_hex();
        assert_eq!(hex.as_str(), format!("{}7fffffffffffffff", "0".repeat(48)));
    }

    #[test]
    fn data_hex_negative_token_is_sign_extended() {
        let hex = Data::new("", -1).to_hex();
        assert_eq!(hex.as_str(), "f".repeat(64));

        let hex = Data::new("", -2).to_hex();
        assert_eq!(hex.as_str(), format!("{}e", "f".repeat(63)));
    }

    #[test]
    fn data_hex_min_token_id() {
        let hex = Data::new("", i64::MIN).to_hex();
        assert_eq!(hex.as_str(), format!("{}8000000000000000", "f".repeat(48)));
    }

    #[test]
    fn contract_call_data_uses_method() {
        let contract = Contract::new(
            Address::parse("0x000000000000000000000000000000000000dEaD").unwrap(),
            "0x6352211e",
        );
        assert_eq!(
            contract.call_data(5).as_str(),
            format!("0x6352211e{}5", "0".repeat(63))
        );
    }

    #[test]
    fn contract_json_shape() {
        let contract = Contract::new(
            Address::parse("0x000000000000000000000000000000000000dEaD").unwrap(),
            "0x6352211e",
        );
        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "0x000000000000000000000000000000000000dEaD",
                "addressMethod": "0x6352211e",
            })
        );
    }

    #[test]
    fn contract_json_rejects_bad_address() {
        let json = r#"{"address":"0x1234","addressMethod":"0x6352211e"}"#;
        assert!(serde_json::from_str::<Contract>(json).is_err());
    }
}
