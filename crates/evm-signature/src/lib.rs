//! Value types and helpers for Ethereum-style hex data.
//!
//! This crate provides:
//! - Hex strings and fixed-width (one ABI word) padding
//! - Address validation, derivation from a 32-byte word, and EIP-55 casing
//! - Format-only private key validation
//! - Chain, chain id, recovery `v`, length and block tag constants
//! - Token-id call data encoding
//! - Wei/ether unit conversion over arbitrary-precision integers
//!
//! Everything here is a pure function of its inputs. Nothing signs, derives
//! keys or talks to a node.

pub mod address;
pub mod chains;
pub mod data;
pub mod error;
pub mod hex;
pub mod private_key;
pub mod types;
pub mod units;

// Re-export key public types for ergonomic imports.
pub use address::{create_valid_address, is_valid_address, Address};
pub use chains::{Chain, ChainId};
pub use data::{new_data_hex, Contract, Data};
pub use error::EvmError;
pub use hex::{create_hex_string_fixed_length, is_hex_character, Hex, HEX_PREFIX};
pub use private_key::{is_valid_private_key, PrivateKey};
pub use types::{BlockTag, Length, PrivateKeyV};
pub use units::{
    ethereum_float_to_wei_big, wei_big_to_ethereum_big, wei_big_to_ethereum_float,
    WEI_IN_ETHEREUM,
};

pub use num_bigint::BigInt;
