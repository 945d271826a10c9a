//! Account command handlers
//!
//! Credits, health, and request history.

use anyhow::Result;
use colored::*;

use scrapegraph_core::dto::account::{HistoryParams, HistoryService};

use super::print_envelope;
use crate::config::Config;

/// Show the credit balance
pub async fn show_credits(config: &Config) -> Result<()> {
    let client = config.connect();
    let resp = client.get_credits().await;

    match &resp.data {
        Some(credits) => {
            println!("{}", "Credits:".bold());
            println!("  Remaining: {}", credits.remaining_credits.to_string().green());
            println!("  Used:      {}", credits.total_credits_used);
            Ok(())
        }
        None => {
            let message = resp.error.as_deref().unwrap_or("unknown error");
            anyhow::bail!("{}", message.red())
        }
    }
}

/// Check API health
pub async fn check_health(config: &Config) -> Result<()> {
    let client = config.connect();
    let resp = client.check_health().await;

    match &resp.data {
        Some(health) => {
            println!("API status: {}", health.status.green());
            Ok(())
        }
        None => {
            let message = resp.error.as_deref().unwrap_or("unknown error");
            anyhow::bail!("{}", message.red())
        }
    }
}

/// List past requests for a service
pub async fn show_history(
    service: &str,
    page: u32,
    page_size: u32,
    config: &Config,
) -> Result<()> {
    let service = parse_service(service)?;

    let client = config.connect();
    let mut params = HistoryParams::new(service);
    params.page = Some(page);
    params.page_size = Some(page_size);

    let resp = client.get_history(&params).await;
    match &resp.data {
        Some(history) => {
            if history.requests.is_empty() {
                println!("{}", format!("No {service} requests found.").yellow());
                return Ok(());
            }
            println!(
                "{}",
                format!(
                    "Page {}/{} ({} request(s) total):",
                    history.page,
                    history.total_count.div_ceil(history.page_size.max(1) as u64),
                    history.total_count
                )
                .bold()
            );
            for entry in &history.requests {
                let status = colorize_status(&entry.status);
                println!("  {} {}  {}", "▸".cyan(), entry.request_id.dimmed(), status);
            }
            Ok(())
        }
        None => print_envelope(&resp),
    }
}

/// Map a service name argument onto the history path segment.
fn parse_service(name: &str) -> Result<HistoryService> {
    let service = match name {
        "markdownify" => HistoryService::Markdownify,
        "smartscraper" => HistoryService::SmartScraper,
        "searchscraper" => HistoryService::SearchScraper,
        "scrape" => HistoryService::Scrape,
        "crawl" => HistoryService::Crawl,
        "agentic-scraper" => HistoryService::AgenticScraper,
        "sitemap" => HistoryService::Sitemap,
        other => anyhow::bail!(
            "unknown service '{other}' (expected one of: markdownify, smartscraper, \
             searchscraper, scrape, crawl, agentic-scraper, sitemap)"
        ),
    };
    Ok(service)
}

/// Colorize a job status for display
fn colorize_status(status: &str) -> colored::ColoredString {
    match status {
        "completed" | "done" | "success" => status.green(),
        "failed" => status.red(),
        _ => status.yellow(),
    }
}
