//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod account;
mod crawl;
mod schema;
mod scrape;

pub use crawl::CrawlArgs;
pub use schema::SchemaArgs;
pub use scrape::ScrapeCommands;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use scrapegraph_core::envelope::ApiResponse;
use serde::Serialize;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scraping operations
    Scrape {
        #[command(subcommand)]
        command: ScrapeCommands,
    },
    /// Crawl a site and wait for the job to finish
    Crawl(CrawlArgs),
    /// Fetch a site's sitemap URL list
    Sitemap {
        /// Site to map
        url: String,
    },
    /// Generate a JSON output schema from a prompt
    Schema(SchemaArgs),
    /// Show the credit balance for this API key
    Credits,
    /// Check API health
    Health,
    /// List past requests for a service
    History {
        /// Service name (e.g. smartscraper, crawl, markdownify)
        service: String,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Entries per page
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scrape { command } => scrape::handle_scrape_command(command, config).await,
        Commands::Crawl(args) => crawl::handle_crawl(args, config).await,
        Commands::Sitemap { url } => crawl::handle_sitemap(&url, config).await,
        Commands::Schema(args) => schema::handle_schema(args, config).await,
        Commands::Credits => account::show_credits(config).await,
        Commands::Health => account::check_health(config).await,
        Commands::History {
            service,
            page,
            page_size,
        } => account::show_history(&service, page, page_size, config).await,
    }
}

/// Print an envelope's payload as pretty JSON, or fail with its error
/// message. Timing goes to stderr so stdout stays pipeable.
pub(crate) fn print_envelope<T: Serialize>(resp: &ApiResponse<T>) -> Result<()> {
    match &resp.data {
        Some(data) => {
            println!("{}", serde_json::to_string_pretty(data)?);
            eprintln!("{}", format!("done in {} ms", resp.elapsed_ms).dimmed());
            Ok(())
        }
        None => {
            let message = resp.error.as_deref().unwrap_or("unknown error");
            anyhow::bail!("{}", message.red())
        }
    }
}
