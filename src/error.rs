//! Error types for faucet operations.
//!
//! Provides strongly-typed errors for the funding flow using `thiserror`.

use thiserror::Error;

/// Errors that can occur while generating and funding test credentials.
#[derive(Debug, Error)]
pub enum FaucetError {
    /// Invalid or inconsistent configuration
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// No known network matches the requested selection
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Transport-level failure talking to a ledger or faucet endpoint
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// The ledger answered a JSON-RPC call with an error
    #[error("RPC error from {method}: {code}")]
    Rpc { method: &'static str, code: String },

    /// The faucet refused to fund the account
    #[error("Faucet rejected request ({status}): {body}")]
    FaucetRejected { status: u16, body: String },

    /// A response did not have the expected shape
    #[error("Decode error: {reason}")]
    Decode { reason: String },

    /// Malformed seed, key or address
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The account never became visible within the configured attempts
    #[error("Account {address} not visible after {attempts} attempts")]
    PollExhausted { address: String, attempts: u32 },

    /// A funding request is already running for this session
    #[error("A funding request is already in flight")]
    InFlight,

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for FaucetError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode { reason: e.to_string() }
        } else {
            Self::Network { reason: e.to_string() }
        }
    }
}

impl From<serde_json::Error> for FaucetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode { reason: e.to_string() }
    }
}

/// Result type alias for faucet operations.
pub type Result<T> = core::result::Result<T, FaucetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_context() {
        let err = FaucetError::Rpc { method: "account_info", code: "actNotFound".to_string() };
        assert_eq!(err.to_string(), "RPC error from account_info: actNotFound");

        let err = FaucetError::PollExhausted { address: "rTest".to_string(), attempts: 3 };
        assert!(err.to_string().contains("rTest"));
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: FaucetError = parse.unwrap_err().into();
        assert!(matches!(err, FaucetError::Decode { .. }));
    }
}
