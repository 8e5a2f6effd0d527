use thiserror::Error;

/// Errors returned by the hex, address, key and unit helpers.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = EvmError::InvalidAddress("expected 40 hex characters, got 8".into());
        assert_eq!(
            err.to_string(),
            "invalid address: expected 40 hex characters, got 8"
        );
    }

    #[test]
    fn display_invalid_value() {
        let err = EvmError::InvalidValue("NaN".into());
        assert_eq!(err.to_string(), "invalid value: NaN");
    }

    #[test]
    fn display_invalid_private_key() {
        let err = EvmError::InvalidPrivateKey("expected 64 hex characters".into());
        assert_eq!(
            err.to_string(),
            "invalid private key: expected 64 hex characters"
        );
    }

    #[test]
    fn display_invalid_hex() {
        let err = EvmError::InvalidHex("odd length".into());
        assert_eq!(err.to_string(), "invalid hex: odd length");
    }

    #[test]
    fn display_unsupported_chain() {
        let err = EvmError::UnsupportedChain("999".into());
        assert_eq!(err.to_string(), "unsupported chain: 999");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(EvmError::InvalidValue("inf".into()));
        assert!(err.to_string().contains("inf"));
    }

    #[test]
    fn debug_format_works() {
        let err = EvmError::InvalidAddress("0x".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidAddress"));
    }
}
