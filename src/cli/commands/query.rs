//! Query command implementation
//!
//! Answers one lookup against a freshly loaded catalog and prints the same JSON
//! body the HTTP API would return.

use super::shared::{load_catalog, resolve_config, setup_logging};
use crate::app::models::StudentQuery;
use crate::app::services::lookup::{LookupResponse, LookupService};
use crate::cli::args::QueryArgs;
use anyhow::Context;
use std::sync::Arc;

/// Query command runner
pub async fn run_query(args: QueryArgs) -> anyhow::Result<LookupResponse> {
    setup_logging(args.load.get_log_level())?;
    args.validate()?;

    let config = resolve_config(&args.load)?;
    let (catalog, _stats) = load_catalog(&config).await?;

    let service = LookupService::new(Arc::new(catalog));
    let response = service.search(&StudentQuery::new(args.student_id, args.name));

    let json = serde_json::to_string_pretty(&response).context("Failed to encode response")?;
    println!("{}", json);

    Ok(response)
}
