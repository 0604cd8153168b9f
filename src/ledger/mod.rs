//! Read access to an XRP Ledger network.
//!
//! The funding flow only needs two calls: a reachability check and an
//! `account_info` lookup. Both sit behind [`LedgerClient`] so the flow can
//! run against a mock in tests.

mod json_rpc;

pub use json_rpc::JsonRpcClient;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Fields of `account_data` the funding flow displays.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountData {
    pub account: String,
    /// Balance in drops, as a decimal string.
    pub balance: String,
    pub sequence: u32,
}

impl AccountData {
    /// Balance in drops.
    pub fn balance_drops(&self) -> Option<u64> {
        self.balance.parse().ok()
    }
}

/// Minimal ledger client used by the funding flow.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Verify the endpoint is reachable.
    async fn connect(&self) -> Result<()>;

    /// Look up an account in the latest validated ledger.
    async fn account_info(&self, address: &str) -> Result<AccountData>;
}
