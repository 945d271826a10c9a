//! Scrape command handlers
//!
//! One subcommand per synchronous scraping endpoint.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;

use scrapegraph_core::dto::scrape::{
    AgenticScraperParams, MarkdownifyParams, ScrapeParams, SearchScraperParams, SmartScraperParams,
};

use super::print_envelope;
use crate::config::Config;

/// Scrape subcommands
#[derive(Subcommand)]
pub enum ScrapeCommands {
    /// Extract structured data from a page with an LLM prompt
    Smart {
        /// Page to scrape
        url: String,

        /// What to extract
        #[arg(short, long)]
        prompt: String,

        /// Path to a JSON schema constraining the output
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Use stealth mode
        #[arg(long)]
        stealth: bool,
    },
    /// Search the web and extract from the results
    Search {
        /// What to find and extract
        #[arg(short, long)]
        prompt: String,

        /// Number of search results to consider
        #[arg(long)]
        num_results: Option<u32>,
    },
    /// Convert a page to markdown
    Markdown {
        /// Page to convert
        url: String,

        /// Use stealth mode
        #[arg(long)]
        stealth: bool,
    },
    /// Fetch the raw HTML of a page
    Html {
        /// Page to fetch
        url: String,

        /// Also extract branding assets
        #[arg(long)]
        branding: bool,
    },
    /// Drive a browser session through a list of steps
    Agentic {
        /// Starting page
        url: String,

        /// Step to perform, repeatable in order
        #[arg(long = "step", required = true)]
        steps: Vec<String>,

        /// Extraction prompt to run once the steps finish
        #[arg(short, long)]
        prompt: Option<String>,
    },
}

/// Handle scrape commands
pub async fn handle_scrape_command(command: ScrapeCommands, config: &Config) -> Result<()> {
    let client = config.connect();

    match command {
        ScrapeCommands::Smart {
            url,
            prompt,
            schema,
            stealth,
        } => {
            let output_schema = schema.as_deref().map(load_json).transpose()?;
            let params = SmartScraperParams {
                website_url: Some(url),
                user_prompt: prompt,
                output_schema,
                stealth: stealth.then_some(true),
                ..Default::default()
            };
            print_envelope(&client.smart_scraper(&params).await)
        }
        ScrapeCommands::Search {
            prompt,
            num_results,
        } => {
            let params = SearchScraperParams {
                user_prompt: prompt,
                num_results,
                ..Default::default()
            };
            print_envelope(&client.search_scraper(&params).await)
        }
        ScrapeCommands::Markdown { url, stealth } => {
            let params = MarkdownifyParams {
                website_url: url,
                stealth: stealth.then_some(true),
                ..Default::default()
            };
            print_envelope(&client.markdownify(&params).await)
        }
        ScrapeCommands::Html { url, branding } => {
            let params = ScrapeParams {
                website_url: url,
                branding: branding.then_some(true),
                ..Default::default()
            };
            print_envelope(&client.scrape(&params).await)
        }
        ScrapeCommands::Agentic { url, steps, prompt } => {
            let ai_extraction = prompt.is_some().then_some(true);
            let params = AgenticScraperParams {
                url,
                steps,
                user_prompt: prompt,
                ai_extraction,
                ..Default::default()
            };
            print_envelope(&client.agentic_scraper(&params).await)
        }
    }
}

/// Read and parse a JSON file.
pub(crate) fn load_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
