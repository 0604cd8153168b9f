//! JSON-RPC ledger client over HTTP.
//!
//! Requests are built from `xrpl` request models and sent in the
//! `{"method", "params": [..]}` envelope the JSON-RPC endpoint expects.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use xrpl::models::requests::account_info::AccountInfo;
use xrpl::models::requests::server_info::ServerInfo;

use super::{AccountData, LedgerClient};
use crate::error::{FaucetError, Result};

/// Ledger client for a network's JSON-RPC endpoint.
pub struct JsonRpcClient {
    http_client: reqwest::Client,
    rpc_url: String,
}

#[derive(Deserialize)]
struct RpcEnvelope {
    result: Value,
}

#[derive(Deserialize)]
struct AccountInfoResult {
    account_data: AccountData,
}

impl JsonRpcClient {
    /// Create a client for `rpc_url` with a per-request timeout.
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FaucetError::Config {
                reason: format!("HTTP client: {}", e),
            })?;

        Ok(Self::with_client(http_client, rpc_url))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_client(http_client: reqwest::Client, rpc_url: &str) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.to_string(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Issue one JSON-RPC call and return its `result` object.
    ///
    /// A `result.error` field is reported as [`FaucetError::Rpc`].
    async fn call<R: Serialize>(&self, method: &'static str, request: &R) -> Result<Value> {
        let request = rpc_envelope(method, request)?;

        let response = self.http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let envelope: RpcEnvelope = response.json().await?;

        if let Some(code) = envelope.result.get("error").and_then(|e| e.as_str()) {
            return Err(FaucetError::Rpc {
                method,
                code: code.to_string(),
            });
        }

        Ok(envelope.result)
    }
}

#[async_trait]
impl LedgerClient for JsonRpcClient {
    async fn connect(&self) -> Result<()> {
        let result = self.call("server_info", &ServerInfo::new(None)).await?;
        let state = result
            .get("info")
            .and_then(|i| i.get("server_state"))
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");
        debug!(rpc_url = %self.rpc_url, server_state = state, "connected");
        Ok(())
    }

    async fn account_info(&self, address: &str) -> Result<AccountData> {
        let request = AccountInfo::new(
            None,
            address.into(),
            None,
            Some("validated".into()),
            None,
            None,
            None,
        );
        let result = self.call("account_info", &request).await?;

        let info: AccountInfoResult = serde_json::from_value(result)?;
        Ok(info.account_data)
    }
}

/// Wrap a serialized request model as a JSON-RPC body.
///
/// Models carry their method in a `command` field; it is dropped from the
/// params and checked against `method`.
fn rpc_envelope<R: Serialize>(method: &'static str, request: &R) -> Result<Value> {
    let mut params = match serde_json::to_value(request)? {
        Value::Object(map) => map,
        other => {
            return Err(FaucetError::Decode {
                reason: format!("{} request is not an object: {}", method, other),
            })
        }
    };

    if let Some(command) = params.remove("command") {
        if command != method {
            return Err(FaucetError::Decode {
                reason: format!("{} request serialized as {}", method, command),
            });
        }
    }
    params.retain(|_, v| !v.is_null());

    Ok(json!({
        "method": method,
        "params": [params],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_info_envelope() {
        let request = AccountInfo::new(
            None,
            "rLUEXYuLiQptky37CqLcm9USQpPiz5rkpD".into(),
            None,
            Some("validated".into()),
            None,
            None,
            None,
        );
        let body = rpc_envelope("account_info", &request).unwrap();
        assert_eq!(body["method"], "account_info");
        assert_eq!(body["params"][0]["account"], "rLUEXYuLiQptky37CqLcm9USQpPiz5rkpD");
        assert_eq!(body["params"][0]["ledger_index"], "validated");
        assert!(body["params"][0].get("command").is_none());
    }

    #[test]
    fn test_server_info_envelope() {
        let body = rpc_envelope("server_info", &ServerInfo::new(None)).unwrap();
        assert_eq!(body["method"], "server_info");
        assert!(body["params"][0].is_object());
    }

    #[test]
    fn test_envelope_rejects_mismatched_command() {
        let err = rpc_envelope("account_info", &ServerInfo::new(None)).unwrap_err();
        assert!(matches!(err, FaucetError::Decode { .. }));
    }

    #[test]
    fn test_client_creation() {
        let client = JsonRpcClient::new("https://s.altnet.rippletest.net:51234/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.rpc_url(), "https://s.altnet.rippletest.net:51234/");
    }

    #[test]
    fn test_account_info_result_decodes() {
        let result = json!({
            "account_data": {
                "Account": "rLUEXYuLiQptky37CqLcm9USQpPiz5rkpD",
                "Balance": "100000000",
                "Flags": 0,
                "LedgerEntryType": "AccountRoot",
                "Sequence": 4567
            },
            "status": "success",
            "validated": true
        });
        let info: AccountInfoResult = serde_json::from_value(result).unwrap();
        assert_eq!(info.account_data.sequence, 4567);
        assert_eq!(info.account_data.balance_drops(), Some(100_000_000));
    }
}
