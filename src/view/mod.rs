//! Text rendering of the faucet page.
//!
//! Each view borrows the state it shows and a [`Translator`], and renders
//! through `Display`.

pub mod format;
pub mod translate;

use core::fmt;

use crate::networks::{FaucetInfo, FaucetList};
use crate::session::{Session, Stage};
pub use format::{format_balance, format_drops_as_xrp, DROPS_PER_XRP};
pub use translate::{Catalog, English, Translator};

/// Hooks testnet has its own faucet outside this list.
pub const HOOKS_FAUCET_URL: &str = "https://hooks-testnet-v3.xrpl-labs.com/";

const INTRO: [&str; 3] = [
    "These parallel XRP Ledger test networks provide platforms for testing changes to the XRP Ledger and software built on it, without using real funds.",
    "These funds are intended for testing only. Test networks' ledger history and balances are reset as necessary. Devnets may be reset without warning.",
    "All balances and XRP on these networks are separate from Mainnet. As a precaution, do not use the Testnet or Devnet credentials on the Mainnet.",
];

/// Endpoint pair of one network.
pub struct Endpoints<'a> {
    pub faucet: &'a FaucetInfo,
    pub tr: &'a dyn Translator,
}

impl fmt::Display for Endpoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("{} Servers", self.faucet.short_name);
        writeln!(f, "{}", self.tr.translate(&title))?;
        writeln!(f, "  // WebSocket")?;
        writeln!(f, "  {}", self.faucet.ws_url)?;
        writeln!(f)?;
        writeln!(f, "  // JSON-RPC")?;
        writeln!(f, "  {}", self.faucet.json_rpc_url)
    }
}

/// Endpoint pairs of every known network.
pub struct Sidebar<'a> {
    pub faucets: &'a FaucetList,
    pub tr: &'a dyn Translator,
}

impl fmt::Display for Sidebar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, faucet) in self.faucets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Endpoints { faucet, tr: self.tr })?;
        }
        Ok(())
    }
}

/// Page header and the network radio list.
pub struct NetworkChooser<'a> {
    pub faucets: &'a FaucetList,
    pub selected: &'a FaucetInfo,
    pub tr: &'a dyn Translator,
}

impl fmt::Display for NetworkChooser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tr.translate("XRP Faucets"))?;
        writeln!(f)?;
        for paragraph in INTRO {
            writeln!(f, "{}", self.tr.translate(paragraph))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.tr.translate("Choose Network:"))?;
        for net in self.faucets.iter() {
            let mark = if net.short_name == self.selected.short_name { "(*)" } else { "( )" };
            writeln!(
                f,
                "  {} {}: {}",
                mark,
                self.tr.translate(&net.short_name),
                self.tr.translate(&net.desc)
            )?;
        }
        writeln!(
            f,
            "{}: {} ({})",
            self.tr.translate("Hooks Testnet"),
            self.tr.translate("See the Hooks Faucet"),
            HOOKS_FAUCET_URL
        )
    }
}

/// Credentials panel: loading states, generated fields, failure message.
pub struct CredentialsView<'a> {
    pub session: &'a Session,
    pub tr: &'a dyn Translator,
}

impl fmt::Display for CredentialsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.session;
        let tr = self.tr;

        if let Some(network) = s.generated_for() {
            let heading = format!("Your {} Credentials", network);
            writeln!(f, "{}", tr.translate(&heading))?;
        }

        if s.stage() == Stage::GeneratingKeys {
            writeln!(f, "{}", tr.translate("Generating keys.."))?;
        }

        if let Some(address) = s.address() {
            writeln!(f, "{}: {}", tr.translate("Address"), address)?;
        }
        if let Some(secret) = s.secret() {
            writeln!(f, "{}: {}", tr.translate("Secret"), secret)?;
        }

        match s.stage() {
            Stage::Funding => writeln!(f, "{}", tr.translate("Funding account..."))?,
            Stage::Waiting => writeln!(f, "{}", tr.translate("Waiting..."))?,
            _ => {}
        }

        if let Some(balance) = s.balance() {
            writeln!(
                f,
                "{}: {} {}",
                tr.translate("Balance"),
                format_balance(balance),
                tr.translate("XRP")
            )?;
        }
        if let Some(sequence) = s.sequence() {
            writeln!(f, "{}: {}", tr.translate("Sequence Number"), sequence)?;
        }

        if let Some(message) = s.failure() {
            writeln!(f, "{}", tr.translate(message))?;
        }
        Ok(())
    }
}

/// Label of the generate action for the selected network.
pub fn generate_label(selected: &FaucetInfo, tr: &dyn Translator) -> String {
    let key = format!("Generate {} credentials", selected.short_name);
    tr.translate(&key).into_owned()
}
