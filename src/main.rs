//! ddg-scout command-line entry point
//!
//! A thin driver around the two tool operations, for running searches and
//! page fetches from a shell. A transport layer embedding the crate uses
//! `ToolServer` directly instead.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ddg_scout::config::{config_from_env, load_config};
use ddg_scout::{ToolServer, TracingSink};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// DuckDuckGo search and page-fetch tools
#[derive(Parser, Debug)]
#[command(name = "ddg-scout")]
#[command(version = "1.0.0")]
#[command(about = "DuckDuckGo search and page-fetch tools for LLM agents", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (environment variables are used if omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search DuckDuckGo and print the rendered results
    Search {
        /// The search query
        query: String,

        /// Maximum number of results to return
        #[arg(long, default_value_t = 10)]
        max_results: usize,

        /// Region code (e.g. "us-en"); empty uses the configured default
        #[arg(long, default_value = "")]
        region: String,
    },

    /// Fetch a web page and print its cleaned text
    Fetch {
        /// The URL to fetch
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => config_from_env(),
    };

    let server = ToolServer::new(&config, Arc::new(TracingSink))
        .context("failed to initialize tool server")?;

    match cli.command {
        Command::Search {
            query,
            max_results,
            region,
        } => {
            let rendered = server.search(&query, max_results, &region).await;
            println!("{rendered}");
        }
        Command::Fetch { url } => {
            let content = server.fetch_content(&url).await;
            println!("{content}");
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ddg_scout=info,warn"),
            1 => EnvFilter::new("ddg_scout=debug,info"),
            2 => EnvFilter::new("ddg_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
