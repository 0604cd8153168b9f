//! Waiting for a freshly funded account to appear on the ledger.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::{FaucetError, Result};
use crate::ledger::{AccountData, LedgerClient};

/// Default delay between `account_info` attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Retry policy for [`wait_for_sequence`].
///
/// Fixed interval, no backoff. `max_attempts: None` polls forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

/// Sequence number and balance of a visible account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceAndBalance {
    pub sequence: u32,
    /// Balance in drops, as reported by the ledger.
    pub balance: String,
}

impl From<AccountData> for SequenceAndBalance {
    fn from(data: AccountData) -> Self {
        Self {
            sequence: data.sequence,
            balance: data.balance,
        }
    }
}

/// Attempt counter for an unbounded poll; pins at `u32::MAX`.
fn next_attempt(attempts: u32) -> u32 {
    attempts.saturating_add(1)
}

/// Poll `account_info` until `address` is visible in a validated ledger.
///
/// Every lookup failure counts as "not there yet".
pub async fn wait_for_sequence<C>(
    client: &C,
    address: &str,
    policy: PollPolicy,
) -> Result<SequenceAndBalance>
where
    C: LedgerClient + ?Sized,
{
    let mut attempts: u32 = 0;

    loop {
        attempts = next_attempt(attempts);
        match client.account_info(address).await {
            Ok(data) => {
                info!(%address, attempts, sequence = data.sequence, "account visible");
                return Ok(data.into());
            }
            Err(e) => {
                debug!(%address, attempts, error = %e, "account not visible yet");
            }
        }

        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Err(FaucetError::PollExhausted {
                    address: address.to_string(),
                    attempts,
                });
            }
        }

        tokio::time::sleep(policy.interval).await;
    }
}
