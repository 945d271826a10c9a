//! Crawl command handlers
//!
//! The crawl command is the one that polls: it prints each observed job
//! status to stderr while waiting.

use anyhow::Result;
use clap::Args;
use colored::*;

use scrapegraph_core::dto::crawl::{CrawlParams, SitemapParams};

use super::print_envelope;
use crate::config::Config;

/// Arguments for the crawl command
#[derive(Args)]
pub struct CrawlArgs {
    /// Starting page
    pub url: String,

    /// Extraction prompt; omit with --markdown-only
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Skip LLM extraction and return markdown per page
    #[arg(long)]
    pub markdown_only: bool,

    /// Page budget for the whole crawl
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Link depth limit
    #[arg(long)]
    pub depth: Option<u32>,

    /// Seed the crawl from the site's sitemap
    #[arg(long)]
    pub sitemap: bool,
}

/// Handle the crawl command
pub async fn handle_crawl(args: CrawlArgs, config: &Config) -> Result<()> {
    if !args.markdown_only && args.prompt.is_none() {
        anyhow::bail!("either pass --prompt or use --markdown-only");
    }

    let client = config.connect();
    let params = CrawlParams {
        url: args.url,
        extraction_mode: args.markdown_only.then_some(false),
        prompt: args.prompt,
        max_pages: args.max_pages,
        depth: args.depth,
        sitemap: args.sitemap.then_some(true),
        ..Default::default()
    };

    let on_status = |status: &str| {
        eprintln!("{}", format!("  status: {status}").dimmed());
    };

    let resp = client.crawl(&params, Some(&on_status)).await;
    print_envelope(&resp)
}

/// Handle the sitemap command
pub async fn handle_sitemap(url: &str, config: &Config) -> Result<()> {
    let client = config.connect();
    let params = SitemapParams {
        website_url: url.to_string(),
        ..Default::default()
    };
    print_envelope(&client.sitemap(&params).await)
}
