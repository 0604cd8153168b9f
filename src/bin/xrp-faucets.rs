//! XRP Faucets CLI.
//!
//! Lists known test networks and generates funded test credentials.
//!
//! Usage:
//!   xrp-faucets list
//!   xrp-faucets generate --network devnet
//!   xrp-faucets wallet [--seed sEd...]

use std::env;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::error;

use xrp_faucets::config::{
    Settings, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_MS, ENV_FAUCETS_FILE,
    ENV_HTTP_TIMEOUT_SECS, ENV_POLL_INTERVAL_MS, ENV_POLL_MAX_ATTEMPTS, ENV_USAGE_CONTEXT,
};
use xrp_faucets::faucet::DEFAULT_USAGE_CONTEXT;
use xrp_faucets::view::{self, CredentialsView, English, NetworkChooser, Sidebar};
use xrp_faucets::{FaucetClient, JsonRpcClient, Result, Session, Wallet};

#[derive(Parser)]
#[command(name = "xrp-faucets", version, about = "Get funded credentials for XRP Ledger test networks")]
struct Cli {
    /// JSON file replacing the built-in faucet list
    #[arg(long, global = true, env = ENV_FAUCETS_FILE)]
    faucets_file: Option<PathBuf>,

    /// Usage context reported to the faucet
    #[arg(long, global = true, env = ENV_USAGE_CONTEXT, default_value = DEFAULT_USAGE_CONTEXT)]
    usage_context: String,

    /// Delay between account lookups, in milliseconds
    #[arg(long, global = true, env = ENV_POLL_INTERVAL_MS, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    poll_interval_ms: u64,

    /// Stop polling after this many lookups (default: never)
    #[arg(long, global = true, env = ENV_POLL_MAX_ATTEMPTS)]
    poll_max_attempts: Option<u32>,

    /// Per-request HTTP timeout, in seconds
    #[arg(long, global = true, env = ENV_HTTP_TIMEOUT_SECS, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    http_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the known networks and their endpoints
    List,
    /// Generate and fund a new account
    Generate {
        /// Network id or name (default: the first listed)
        #[arg(short, long)]
        network: Option<String>,
    },
    /// Generate a keypair offline, or derive one from a seed
    Wallet {
        #[arg(long)]
        seed: Option<String>,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            faucets_file: self.faucets_file.clone(),
            usage_context: self.usage_context.clone(),
            poll_interval_ms: self.poll_interval_ms,
            poll_max_attempts: self.poll_max_attempts,
            http_timeout_secs: self.http_timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings();
    settings.validate()?;

    match cli.command {
        Command::List => {
            let faucets = settings.faucet_list()?;
            let selected = faucets.default_selection();
            print!("{}", NetworkChooser { faucets: &faucets, selected, tr: &English });
            println!();
            print!("{}", Sidebar { faucets: &faucets, tr: &English });
        }
        Command::Generate { network } => {
            let faucets = settings.faucet_list()?;
            let selected = match network.as_deref() {
                Some(key) => faucets.find(key)?,
                None => faucets.default_selection(),
            };

            println!("{}", view::generate_label(selected, &English));

            let ledger = JsonRpcClient::new(&selected.json_rpc_url, settings.http_timeout())?;
            let faucet = FaucetClient::new(
                &selected.faucet_url,
                &settings.usage_context,
                settings.http_timeout(),
            )?;

            let mut session = Session::new(selected.clone()).with_poll_policy(settings.poll_policy());
            let outcome = session.generate_credentials(&ledger, &faucet).await;

            print!("{}", CredentialsView { session: &session, tr: &English });
            outcome?;
        }
        Command::Wallet { seed } => {
            let wallet = match seed {
                Some(seed) => Wallet::from_seed(&seed)?,
                None => Wallet::generate()?,
            };
            println!("Address:     {}", wallet.address());
            println!("Secret:      {}", wallet.seed());
            println!("Public Key:  {}", wallet.public_key_hex());
        }
    }

    Ok(())
}
