//! Ed25519 wallets for XRP Ledger test accounts.
//!
//! Seeds, keys and addresses come from `xrpl::core::keypairs`; this module
//! only owns the entropy source and keeps the secret out of `Debug`.

use core::fmt;

use rand::RngCore;
use xrpl::constants::CryptoAlgorithm;
use xrpl::core::addresscodec::is_valid_classic_address;
use xrpl::core::keypairs::{derive_classic_address, derive_keypair, generate_seed};
use zeroize::Zeroize;

use crate::error::{FaucetError, Result};

/// Bytes of entropy behind a family seed.
pub const SEED_ENTROPY_LEN: usize = 16;

/// A generated public/secret keypair representing a ledger account.
pub struct Wallet {
    seed: String,
    public_key: String,
    private_key: String,
    classic_address: String,
}

fn keypair_error(e: impl fmt::Display) -> FaucetError {
    FaucetError::InvalidInput {
        reason: format!("keypair: {}", e),
    }
}

impl Wallet {
    /// Generate a fresh wallet from OS randomness.
    pub fn generate() -> Result<Self> {
        let mut entropy = [0u8; SEED_ENTROPY_LEN];
        rand::thread_rng().fill_bytes(&mut entropy);
        let wallet = Self::from_entropy(&entropy);
        entropy.zeroize();
        wallet
    }

    /// Derive a wallet from raw seed entropy.
    pub fn from_entropy(entropy: &[u8; SEED_ENTROPY_LEN]) -> Result<Self> {
        let mut seed = generate_seed(Some(*entropy), Some(CryptoAlgorithm::ED25519))
            .map_err(keypair_error)?;
        let wallet = Self::from_seed(&seed);
        seed.zeroize();
        wallet
    }

    /// Re-derive a wallet from a family seed.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let (public_key, private_key) = derive_keypair(seed, false).map_err(keypair_error)?;
        let classic_address = derive_classic_address(&public_key).map_err(keypair_error)?;

        if !is_valid_classic_address(&classic_address) {
            return Err(FaucetError::InvalidInput {
                reason: format!("derived address {} is not valid", classic_address),
            });
        }

        Ok(Self {
            seed: seed.to_string(),
            public_key,
            private_key,
            classic_address,
        })
    }

    /// Classic `r...` address.
    pub fn address(&self) -> String {
        self.classic_address.clone()
    }

    /// Family seed; the secret shown to the user.
    pub fn seed(&self) -> String {
        self.seed.clone()
    }

    /// Public key as uppercase hex, `ED`-prefixed.
    pub fn public_key_hex(&self) -> &str {
        &self.public_key
    }

    /// Private key as uppercase hex, `ED`-prefixed.
    pub fn private_key_hex(&self) -> &str {
        &self.private_key
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.seed.zeroize();
        self.private_key.zeroize();
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.classic_address)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
