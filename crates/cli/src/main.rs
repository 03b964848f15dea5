mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use episodic_core::{
    load_config, search_once, search_with_fallback, validate_config, Config, NyaaClient,
    SearchRequest,
};

/// Config file used when none is given and it exists in the working directory
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Parser)]
#[command(name = "episodic", version, about = "Find episode releases on a torrent feed")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, env = "EPISODIC_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for an episode, falling back to alternate titles
    Search {
        /// Title used for the primary query
        title: String,
        /// Alternate title (repeatable); used for ranking and fallback queries
        #[arg(long = "alt")]
        alt_titles: Vec<String>,
        /// Episode number (0 = unspecified)
        #[arg(long, short, default_value_t = 0)]
        episode: u32,
        /// Quality descriptor, e.g. 1080p (defaults to search.preferred_quality)
        #[arg(long, short)]
        quality: Option<String>,
    },
    /// Run one query as-is, without ranking
    Raw {
        /// Feed query
        query: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so results on stdout stay pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    validate_config(&config).context("Configuration validation failed")?;

    let feed = NyaaClient::new(config.feed.clone()).context("Failed to create feed client")?;
    info!(url = %feed.config().url, "Feed client ready");

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling search");
            on_interrupt.cancel();
        }
    });

    let items = match cli.command {
        Command::Search {
            title,
            alt_titles,
            episode,
            quality,
        } => {
            let request = SearchRequest {
                primary_title: title,
                alt_titles,
                episode,
                quality: quality
                    .or_else(|| config.search.preferred_quality.clone())
                    .unwrap_or_default(),
            };
            search_with_fallback(&feed, &request, &cancel)
                .await
                .context("Search failed")?
        }
        Command::Raw { query } => search_once(&feed, &query, &cancel)
            .await
            .with_context(|| format!("Query {:?} failed", query))?,
    };

    if cli.json {
        output::print_json(&items)?;
    } else {
        output::print_table(&items);
    }

    Ok(())
}

/// Load the explicit config file, else `config.toml` if present, else defaults
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                info!("No config file, using defaults");
                return Ok(Config::default());
            }
            fallback
        }
    };

    info!("Loading configuration from {:?}", path);
    load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
}
