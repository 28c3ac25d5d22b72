mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use reachlog_core::Provider;
use reachlog_service::{InteractionStore, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reachlog")]
#[command(about = "Per-account interaction state for outreach automation", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StoreArgs {
    /// Directory holding one sub-directory per account
    #[arg(long, global = true, env = "REACHLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Account whose state is read and written; omit for a stateless run
    #[arg(short, long, global = true, env = "REACHLOG_ACCOUNT")]
    account: Option<String>,

    /// Re-interaction cooldown in hours, either `N` or `MIN-MAX`
    #[arg(long, global = true, env = "REACHLOG_REINTERACT_AFTER")]
    reinteract_after: Option<String>,

    /// Accounts that receive usernames passed to `enqueue`
    #[arg(long, global = true, env = "REACHLOG_SCRAPE_FOR", value_delimiter = ',')]
    scrape_for: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Everything known about one username
    Status { username: String },
    /// Record one contact attempt
    RecordInteraction {
        username: String,
        #[arg(long)]
        followed: bool,
        #[arg(long)]
        unfollowed: bool,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short = 't', long)]
        interaction_type: Option<String>,
        #[arg(short, long, default_value = "unknown")]
        provider: Provider,
    },
    /// Record a scrape of a username
    RecordScrape {
        username: String,
        #[arg(long)]
        failed: bool,
    },
    /// Mark a username as rejected by filters
    RecordFiltered { username: String },
    /// Hand a username to every `--scrape-for` account
    Enqueue {
        username: String,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short = 't', long)]
        interaction_type: Option<String>,
    },
    /// Pop the next usable target of the account
    NextTarget,
    /// Show queued targets without consuming them
    Targets {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Record counts of the account
    Stats,
}

fn get_data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("reachlog")
}

impl StoreArgs {
    fn to_config(&self) -> StoreConfig {
        let data_dir = self.data_dir.clone().unwrap_or_else(get_data_dir);
        let mut config = StoreConfig::new(data_dir);
        if let Some(account) = &self.account {
            config = config.account(account);
        }
        if let Some(value) = &self.reinteract_after {
            config = config.reinteract_after(value);
        }
        for account in self.scrape_for.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
            config = config.scrape_for(account);
        }
        config
    }

    fn open(&self) -> Result<InteractionStore> {
        Ok(InteractionStore::open(&self.to_config())?)
    }
}

fn main() -> Result<()> {
    // stdout carries the JSON results, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let store = cli.store.open()?;

    match cli.command {
        Commands::Status { username } => commands::query::run_status(&store, &username)?,
        Commands::RecordInteraction {
            username,
            followed,
            unfollowed,
            source,
            interaction_type,
            provider,
        } => {
            let outcome = commands::record::outcome(
                followed,
                unfollowed,
                source,
                interaction_type,
                provider,
            );
            commands::record::run_interaction(&store, &username, &outcome)?;
        },
        Commands::RecordScrape { username, failed } => {
            commands::record::run_scrape(&store, &username, !failed)?;
        },
        Commands::RecordFiltered { username } => {
            commands::record::run_filtered(&store, &username)?;
        },
        Commands::Enqueue { username, source, interaction_type } => {
            commands::queue::run_enqueue(
                &store,
                &username,
                source.as_deref(),
                interaction_type.as_deref(),
            )?;
        },
        Commands::NextTarget => commands::queue::run_next_target(&store)?,
        Commands::Targets { limit } => commands::queue::run_targets(&store, limit)?,
        Commands::Stats => commands::query::run_stats(&store)?,
    }

    Ok(())
}
