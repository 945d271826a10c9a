//! ScrapeGraphAI CLI
//!
//! Command-line interface for the ScrapeGraphAI extraction API.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use scrapegraph_client::ClientConfig;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scrapegraph")]
#[command(about = "ScrapeGraphAI extraction API CLI", long_about = None)]
struct Cli {
    /// API key
    #[arg(long, env = "SGAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API base URL
    #[arg(
        long,
        env = "SGAI_API_URL",
        default_value = "https://api.scrapegraphai.com/v1"
    )]
    base_url: String,

    /// Request and polling timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Trace requests and responses to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let client_config = ClientConfig {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        ..ClientConfig::default()
    };
    client_config
        .validate()
        .map_err(|msg| anyhow::anyhow!("invalid configuration: {msg}"))?;

    let config = Config {
        api_key: cli.api_key,
        client: client_config,
    };

    handle_command(cli.command, &config).await
}

/// Initialize logging. `--debug` turns on client request/response tracing;
/// otherwise RUST_LOG applies as usual.
fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("scrapegraph_client=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "scrapegraph_client=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
