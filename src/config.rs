//! Runtime settings.
//!
//! The binary fills [`Settings`] from flags and environment variables; the
//! library only reads it.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{FaucetError, Result};
use crate::faucet::DEFAULT_USAGE_CONTEXT;
use crate::networks::{known_faucets, FaucetList};
use crate::poll::PollPolicy;

/// Environment variable naming a replacement faucet list.
pub const ENV_FAUCETS_FILE: &str = "XRP_FAUCETS_FILE";
pub const ENV_USAGE_CONTEXT: &str = "XRP_FAUCET_USAGE_CONTEXT";
pub const ENV_POLL_INTERVAL_MS: &str = "XRP_POLL_INTERVAL_MS";
pub const ENV_POLL_MAX_ATTEMPTS: &str = "XRP_POLL_MAX_ATTEMPTS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "XRP_HTTP_TIMEOUT_SECS";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Replacement faucet list; the built-in list when `None`.
    pub faucets_file: Option<PathBuf>,
    pub usage_context: String,
    pub poll_interval_ms: u64,
    /// `None` polls until the account appears.
    pub poll_max_attempts: Option<u32>,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            faucets_file: None,
            usage_context: DEFAULT_USAGE_CONTEXT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            poll_max_attempts: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Validates settings at startup.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(FaucetError::Config {
                reason: format!("{} must be greater than 0", ENV_POLL_INTERVAL_MS),
            });
        }
        if self.poll_max_attempts == Some(0) {
            return Err(FaucetError::Config {
                reason: format!("{} must be greater than 0 when set", ENV_POLL_MAX_ATTEMPTS),
            });
        }
        if self.http_timeout_secs == 0 {
            return Err(FaucetError::Config {
                reason: format!("{} must be greater than 0", ENV_HTTP_TIMEOUT_SECS),
            });
        }
        if self.usage_context.trim().is_empty() {
            return Err(FaucetError::Config {
                reason: format!("{} cannot be empty", ENV_USAGE_CONTEXT),
            });
        }
        Ok(())
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_attempts: self.poll_max_attempts,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// The configured faucet list.
    pub fn faucet_list(&self) -> Result<FaucetList> {
        match &self.faucets_file {
            Some(path) => FaucetList::from_path(path),
            None => known_faucets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.poll_policy(), PollPolicy::default());
        assert_eq!(settings.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_values_rejected() {
        let settings = Settings { poll_interval_ms: 0, ..Settings::default() };
        assert!(settings.validate().is_err());

        let settings = Settings { poll_max_attempts: Some(0), ..Settings::default() };
        assert!(settings.validate().is_err());

        let settings = Settings { http_timeout_secs: 0, ..Settings::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_faucet_file() {
        let settings = Settings {
            faucets_file: Some(PathBuf::from("/nonexistent/faucets.json")),
            ..Settings::default()
        };
        assert!(matches!(settings.faucet_list(), Err(FaucetError::Io(_))));
    }

    #[test]
    fn test_faucet_file_replaces_builtin_list() {
        let path = std::env::temp_dir().join(format!("xrp-faucets-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"knownFaucets":[
                {"id":"faucet-select-localnet","wsUrl":"ws://127.0.0.1:6006/",
                 "jsonRpcUrl":"http://127.0.0.1:5005/","faucetUrl":"http://127.0.0.1:8080",
                 "shortName":"Localnet","desc":"Local rippled"},
                {"id":"faucet-select-staging","wsUrl":"wss://staging.example/",
                 "jsonRpcUrl":"https://staging.example/","faucetUrl":"faucet.staging.example",
                 "shortName":"Staging","desc":"Staging net"}
            ]}"#,
        )
        .unwrap();

        let settings = Settings { faucets_file: Some(path.clone()), ..Settings::default() };
        let list = settings.faucet_list();
        std::fs::remove_file(&path).unwrap();
        let list = list.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.default_selection().short_name, "Localnet");
        assert_eq!(list.default_selection().json_rpc_url, "http://127.0.0.1:5005/");
        assert_eq!(list.find("staging").unwrap().id, "faucet-select-staging");
        assert!(list.find("Testnet").is_err());
    }
}
