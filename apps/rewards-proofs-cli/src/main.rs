use alloy_primitives::{Address, B256};
use clap::{ArgAction, Args, Parser, Subcommand};
use rewards_proofs_fetcher::ProofDataFetcher;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;

use commands::source::Source;
use config::CliConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "rewards-proofs")]
#[command(about = "Rewards merkle root and claim proof generator")]
#[command(version)]
struct Cli {
    /// YAML config file
    #[arg(short, long, global = true, env = "REWARDS_PROOFS_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the published rewards data
    #[arg(long, global = true, env = "REWARDS_PROOFS_BASE_URL")]
    base_url: Option<String>,

    /// Deployment environment, e.g. preprod or mainnet
    #[arg(long, global = true, env = "REWARDS_PROOFS_ENVIRONMENT")]
    environment: Option<String>,

    /// Network name, e.g. holesky
    #[arg(long, global = true, env = "REWARDS_PROOFS_NETWORK")]
    network: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Claim amounts source; defaults to the latest published snapshot
#[derive(Args)]
struct SourceArgs {
    /// Local NDJSON file of earner lines
    #[arg(short, long, conflicts_with = "snapshot_date")]
    file: Option<PathBuf>,

    /// Published snapshot date (YYYY-MM-DD)
    #[arg(short, long)]
    snapshot_date: Option<String>,
}

impl From<SourceArgs> for Source {
    fn from(args: SourceArgs) -> Self {
        Source::new(args.file, args.snapshot_date)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the account tree root of a distribution
    Root {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate a claim proof for an earner, formatted for Solidity
    Claim {
        #[command(flatten)]
        source: SourceArgs,

        /// Earner address
        #[arg(short, long)]
        earner: Address,

        /// Comma-separated token addresses to claim
        #[arg(short, long, value_delimiter = ',', required = true)]
        tokens: Vec<Address>,

        /// Index of the root on chain; looked up from posted roots when omitted for remote data, required with --file
        #[arg(long)]
        root_index: Option<u32>,

        /// Fail unless the computed root equals this one
        #[arg(long)]
        expected_root: Option<B256>,
    },

    /// List recent snapshot dates, newest first
    Snapshots {
        /// Maximum number of dates to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let config = file_config.merge(CliConfig {
        base_url: cli.base_url,
        environment: cli.environment,
        network: cli.network,
        ..Default::default()
    });
    let fetcher = ProofDataFetcher::new(config.fetcher_config()?)?;

    match cli.command {
        Commands::Root { source } => commands::root::execute(&fetcher, source.into()).await,

        Commands::Claim {
            source,
            earner,
            tokens,
            root_index,
            expected_root,
        } => {
            commands::claim::execute(
                &fetcher,
                source.into(),
                earner,
                tokens,
                root_index,
                expected_root,
            )
            .await
        }

        Commands::Snapshots { limit } => commands::snapshots::execute(&fetcher, limit).await,
    }
}
