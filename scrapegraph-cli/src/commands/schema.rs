//! Schema command handler

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use scrapegraph_core::dto::schema::GenerateSchemaParams;

use super::print_envelope;
use super::scrape::load_json;
use crate::config::Config;

/// Arguments for the schema command
#[derive(Args)]
pub struct SchemaArgs {
    /// What the schema should describe
    pub prompt: String,

    /// Path to an existing JSON schema to refine
    #[arg(long)]
    pub existing: Option<PathBuf>,
}

/// Handle the schema command
pub async fn handle_schema(args: SchemaArgs, config: &Config) -> Result<()> {
    let existing_schema = args.existing.as_deref().map(load_json).transpose()?;

    let client = config.connect();
    let params = GenerateSchemaParams {
        user_prompt: args.prompt,
        existing_schema,
    };
    print_envelope(&client.generate_schema(&params).await)
}
