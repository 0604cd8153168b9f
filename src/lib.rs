//! # XRP Faucets
//!
//! Request funded test credentials from XRP Ledger test-network faucets.
//!
//! The crate keeps a list of known test networks, generates a fresh Ed25519
//! wallet, asks the selected network's faucet to fund it, and polls the
//! ledger until the new account is visible.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use xrp_faucets::{known_faucets, FaucetClient, JsonRpcClient, Session};
//!
//! # async fn run() -> xrp_faucets::Result<()> {
//! let faucets = known_faucets()?;
//! let network = faucets.find("Testnet")?.clone();
//!
//! let ledger = JsonRpcClient::new(&network.json_rpc_url, Duration::from_secs(30))?;
//! let faucet = FaucetClient::new(&network.faucet_url, "xrpl.org-faucet", Duration::from_secs(30))?;
//!
//! let mut session = Session::new(network);
//! let creds = session.generate_credentials(&ledger, &faucet).await?;
//! println!("{} funded with {} drops", creds.address, creds.balance);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security
//!
//! - Seeds and private keys are zeroized on drop
//! - `Debug` output never includes secrets

pub mod config;
pub mod error;
pub mod faucet;
pub mod ledger;
pub mod networks;
pub mod poll;
pub mod session;
pub mod view;
pub mod wallet;

pub use config::Settings;
pub use error::{FaucetError, Result};
pub use faucet::{FaucetClient, FundingApi, FundingReceipt};
pub use ledger::{AccountData, JsonRpcClient, LedgerClient};
pub use networks::{known_faucets, FaucetInfo, FaucetList};
pub use poll::{wait_for_sequence, PollPolicy, SequenceAndBalance};
pub use session::{Credentials, Session, Stage};
pub use wallet::Wallet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
