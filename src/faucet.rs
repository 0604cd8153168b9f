//! Faucet client for funding new test accounts.
//!
//! Faucets accept `POST /accounts` with the destination address and
//! answer with the funded account and amount.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FaucetError, Result};

/// Path of the funding endpoint on every faucet host.
pub const FAUCET_PATH: &str = "/accounts";

/// User agent reported to the faucet.
pub const USER_AGENT: &str = "xrpl.js";

/// Default usage context reported to the faucet.
pub const DEFAULT_USAGE_CONTEXT: &str = "xrpl.org-faucet";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FundRequest<'a> {
    destination: &'a str,
    user_agent: &'a str,
    usage_context: &'a str,
}

/// Account block of a faucet response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundedAccount {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub classic_address: Option<String>,
}

/// What the faucet reported after accepting a funding request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingReceipt {
    #[serde(default)]
    pub account: FundedAccount,
    /// Amount sent, in XRP.
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, alias = "hash")]
    pub transaction_hash: Option<String>,
}

impl FundingReceipt {
    /// Classic address the faucet funded, if it said so.
    pub fn funded_address(&self) -> Option<&str> {
        self.account
            .classic_address
            .as_deref()
            .or(self.account.address.as_deref())
    }
}

/// Something that can fund a fresh address.
#[async_trait]
pub trait FundingApi: Send + Sync {
    async fn fund(&self, address: &str) -> Result<FundingReceipt>;
}

/// HTTP client for one faucet host.
pub struct FaucetClient {
    http_client: reqwest::Client,
    endpoint: String,
    usage_context: String,
}

impl FaucetClient {
    /// Create a client for `faucet_url` with a per-request timeout.
    pub fn new(faucet_url: &str, usage_context: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FaucetError::Config {
                reason: format!("HTTP client: {}", e),
            })?;

        Ok(Self::with_client(http_client, faucet_url, usage_context))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_client(http_client: reqwest::Client, faucet_url: &str, usage_context: &str) -> Self {
        Self {
            http_client,
            endpoint: funding_endpoint(faucet_url),
            usage_context: usage_context.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FundingApi for FaucetClient {
    async fn fund(&self, address: &str) -> Result<FundingReceipt> {
        let request = FundRequest {
            destination: address,
            user_agent: USER_AGENT,
            usage_context: &self.usage_context,
        };

        info!(endpoint = %self.endpoint, %address, "requesting faucet funds");

        let response = self.http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FaucetError::FaucetRejected {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: FundingReceipt = response.json().await?;
        debug!(?receipt, "faucet accepted request");
        Ok(receipt)
    }
}

/// Build the funding URL from a faucet host.
///
/// A bare host gets `https://`; a URL that already names a scheme keeps it.
pub fn funding_endpoint(faucet_url: &str) -> String {
    let base = faucet_url.trim_end_matches('/');
    if base.contains("://") {
        format!("{}{}", base, FAUCET_PATH)
    } else {
        format!("https://{}{}", base, FAUCET_PATH)
    }
}
