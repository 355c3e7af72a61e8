//! Serve command implementation
//!
//! Loads the catalog once, then serves lookups until Ctrl+C.

use super::shared::{load_catalog, resolve_config, setup_logging, shutdown_signal};
use crate::app::adapters::http::HttpServer;
use crate::cli::args::ServeArgs;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

/// Serve command runner
pub async fn run_serve(args: ServeArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = resolve_config(&args.load)?;
    let config = args.apply_to(config)?;

    let (catalog, _stats) = load_catalog(&config).await?;
    if catalog.is_empty() {
        info!("Catalog is empty; every lookup will answer not admitted");
    }

    let server = HttpServer::new(config.server.clone(), Arc::new(catalog));
    info!("Starting lookup API on {}", server.bind_address());

    server
        .run_with_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}
