//! Per-run credential session and the funding flow.
//!
//! A [`Session`] holds everything the view shows: the selected network,
//! the generated address and secret, and the balance and sequence once
//! the account is visible. All of it is ephemeral.

use tracing::{info, warn};
use zeroize::Zeroize;

use crate::error::{FaucetError, Result};
use crate::faucet::FundingApi;
use crate::ledger::LedgerClient;
use crate::networks::FaucetInfo;
use crate::poll::{wait_for_sequence, PollPolicy};
use crate::wallet::Wallet;

/// Which part of the flow the session is in, derived from its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Nothing requested yet
    Idle,
    /// Request started, no keypair shown yet
    GeneratingKeys,
    /// Keypair shown, faucet not answered yet
    Funding,
    /// Faucet answered, waiting for the account to appear
    Waiting,
    /// Balance and sequence known
    Complete,
    /// Last request failed
    Failed,
}

/// Funded credentials returned by a successful flow.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub network: String,
    pub address: String,
    pub secret: String,
    /// Balance in drops.
    pub balance: String,
    pub sequence: u32,
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("network", &self.network)
            .field("address", &self.address)
            .field("balance", &self.balance)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// UI state for one run.
pub struct Session {
    selected: FaucetInfo,
    generated_for: Option<String>,
    address: Option<String>,
    secret: Option<String>,
    funded: bool,
    balance: Option<String>,
    sequence: Option<u32>,
    in_flight: bool,
    failure: Option<String>,
    poll_policy: PollPolicy,
}

impl Session {
    /// Start a session with `selected` as the chosen network.
    pub fn new(selected: FaucetInfo) -> Self {
        Self {
            selected,
            generated_for: None,
            address: None,
            secret: None,
            funded: false,
            balance: None,
            sequence: None,
            in_flight: false,
            failure: None,
            poll_policy: PollPolicy::default(),
        }
    }

    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = policy;
        self
    }

    /// Change the selected network. Previously generated credentials stay
    /// labelled with the network they were generated for.
    pub fn select(&mut self, network: FaucetInfo) {
        self.selected = network;
    }

    pub fn selected(&self) -> &FaucetInfo {
        &self.selected
    }

    /// Endpoint pair of the selected network: `(WebSocket, JSON-RPC)`.
    pub fn endpoints(&self) -> (&str, &str) {
        self.selected.endpoints()
    }

    pub fn generated_for(&self) -> Option<&str> {
        self.generated_for.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Balance in drops, once known.
    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn sequence(&self) -> Option<u32> {
        self.sequence
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Untranslated failure message of the last request.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn stage(&self) -> Stage {
        if self.failure.is_some() {
            Stage::Failed
        } else if self.sequence.is_some() && self.balance.is_some() {
            Stage::Complete
        } else if !self.in_flight {
            Stage::Idle
        } else if self.address.is_none() {
            Stage::GeneratingKeys
        } else if !self.funded {
            Stage::Funding
        } else {
            Stage::Waiting
        }
    }

    /// Mark a request as started and clear every displayed field.
    pub fn begin_request(&mut self) {
        self.in_flight = true;
        self.generated_for = Some(self.selected.short_name.clone());
        self.clear_credentials();
        self.funded = false;
        self.balance = None;
        self.sequence = None;
        self.failure = None;
    }

    /// Drop all state of the last request, including a stuck in-flight flag
    /// left behind by a cancelled flow.
    pub fn reset(&mut self) {
        self.begin_request();
        self.in_flight = false;
        self.generated_for = None;
    }

    fn clear_credentials(&mut self) {
        if let Some(secret) = self.secret.as_mut() {
            secret.zeroize();
        }
        self.secret = None;
        self.address = None;
    }

    /// Generate a fresh wallet and fund it on the selected network.
    pub async fn generate_credentials<L, F>(&mut self, ledger: &L, faucet: &F) -> Result<Credentials>
    where
        L: LedgerClient + ?Sized,
        F: FundingApi + ?Sized,
    {
        let wallet = Wallet::generate()?;
        self.generate_credentials_with(ledger, faucet, wallet).await
    }

    /// Fund `wallet` on the selected network and wait until it is visible.
    ///
    /// Any failure is reported once, as a message naming the network, and
    /// leaves no address/secret pair behind.
    pub async fn generate_credentials_with<L, F>(
        &mut self,
        ledger: &L,
        faucet: &F,
        wallet: Wallet,
    ) -> Result<Credentials>
    where
        L: LedgerClient + ?Sized,
        F: FundingApi + ?Sized,
    {
        if self.in_flight {
            return Err(FaucetError::InFlight);
        }

        self.begin_request();
        let network = self.selected.short_name.clone();
        info!(%network, "generating credentials");

        let outcome = self.run_flow(ledger, faucet, &wallet).await;
        self.in_flight = false;

        match outcome {
            Ok(credentials) => {
                info!(%network, address = %credentials.address, "credentials ready");
                Ok(credentials)
            }
            Err(e) => {
                warn!(%network, error = %e, "funding failed");
                self.clear_credentials();
                self.failure = Some(failure_message(&network));
                Err(e)
            }
        }
    }

    async fn run_flow<L, F>(&mut self, ledger: &L, faucet: &F, wallet: &Wallet) -> Result<Credentials>
    where
        L: LedgerClient + ?Sized,
        F: FundingApi + ?Sized,
    {
        ledger.connect().await?;

        let address = wallet.address();
        self.address = Some(address.clone());
        self.secret = Some(wallet.seed());

        let receipt = faucet.fund(&address).await?;
        if let Some(funded) = receipt.funded_address() {
            if funded != address {
                return Err(FaucetError::Decode {
                    reason: format!("faucet funded {} instead of {}", funded, address),
                });
            }
        }
        self.funded = true;

        let visible = wait_for_sequence(ledger, &address, self.poll_policy).await?;
        self.sequence = Some(visible.sequence);
        self.balance = Some(visible.balance.clone());

        Ok(Credentials {
            network: self.selected.short_name.clone(),
            address,
            secret: wallet.seed(),
            balance: visible.balance,
            sequence: visible.sequence,
        })
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("selected", &self.selected.short_name)
            .field("stage", &self.stage())
            .field("address", &self.address)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

/// Message shown when a request against `network` fails.
pub fn failure_message(network: &str) -> String {
    format!("There was an error with the {} faucet. Please try again.", network)
}
