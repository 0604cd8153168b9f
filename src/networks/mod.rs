//! Known XRP Ledger test networks and their faucet endpoints.
//!
//! The built-in list ships inside the binary; a replacement list with the
//! same JSON shape can be loaded from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FaucetError, Result};

/// Built-in faucet list.
const BUILTIN_FAUCETS: &str = include_str!("faucets.json");

/// Static descriptor of one test network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaucetInfo {
    pub id: String,
    pub ws_url: String,
    pub json_rpc_url: String,
    pub faucet_url: String,
    pub short_name: String,
    pub desc: String,
}

impl FaucetInfo {
    /// The `(WebSocket, JSON-RPC)` endpoint pair shown for this network.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.ws_url, &self.json_rpc_url)
    }

    /// Whether `key` selects this network, by id or by short name.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.short_name.eq_ignore_ascii_case(key)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaucetDocument {
    known_faucets: Vec<FaucetInfo>,
}

/// Ordered, validated list of network descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaucetList {
    faucets: Vec<FaucetInfo>,
}

impl FaucetList {
    /// Parse a `{"knownFaucets": [...]}` document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: FaucetDocument = serde_json::from_str(text)?;
        Self::new(doc.known_faucets)
    }

    /// Load a faucet list from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build a list, rejecting empty lists and duplicate short names.
    pub fn new(faucets: Vec<FaucetInfo>) -> Result<Self> {
        if faucets.is_empty() {
            return Err(FaucetError::Config {
                reason: "faucet list is empty".to_string(),
            });
        }

        for (i, faucet) in faucets.iter().enumerate() {
            if faucets[..i].iter().any(|f| f.short_name.eq_ignore_ascii_case(&faucet.short_name)) {
                return Err(FaucetError::Config {
                    reason: format!("duplicate network name: {}", faucet.short_name),
                });
            }
        }

        Ok(Self { faucets })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaucetInfo> {
        self.faucets.iter()
    }

    pub fn len(&self) -> usize {
        self.faucets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faucets.is_empty()
    }

    /// Find a network by id or case-insensitive short name.
    pub fn find(&self, key: &str) -> Result<&FaucetInfo> {
        self.faucets
            .iter()
            .find(|f| f.matches(key))
            .ok_or_else(|| FaucetError::UnknownNetwork(key.to_string()))
    }

    /// The initially selected network: the first one listed.
    pub fn default_selection(&self) -> &FaucetInfo {
        // non-empty by construction
        &self.faucets[0]
    }
}

/// The built-in list of known faucets.
pub fn known_faucets() -> Result<FaucetList> {
    FaucetList::from_json(BUILTIN_FAUCETS)
}
