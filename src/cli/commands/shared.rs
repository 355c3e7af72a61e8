//! Shared components for CLI commands
//!
//! Logging setup, configuration resolution and catalog loading used by every
//! command.

use crate::app::services::student_catalog::{LoadStats, LoaderOptions, StudentCatalog};
use crate::cli::args::LoadArgs;
use crate::config::Config;
use crate::{Error, Result};
use anyhow::Context;
use tracing::{debug, info, warn};

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "admission_lookup={},tower_http={}",
            log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialised at level '{}'", log_level);
    Ok(())
}

/// Resolve the layered configuration for a command
///
/// Defaults, then the config file, then the environment, then `args`.
pub fn resolve_config(args: &LoadArgs) -> anyhow::Result<Config> {
    args.validate()?;

    let mut config =
        Config::load(args.config_path.as_deref()).context("Failed to load configuration")?;
    config = args.apply_to(config);
    if args.show_progress() {
        config = config.with_progress();
    }

    config.validate().context("Invalid configuration")?;
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Load the catalog described by `config`
///
/// Workbook decoding is blocking, so it runs on the blocking thread pool.
pub async fn load_catalog(config: &Config) -> anyhow::Result<(StudentCatalog, LoadStats)> {
    let data_dir = config.loader.data_dir.clone();
    let options = LoaderOptions::from(&config.loader);

    let (catalog, stats) =
        tokio::task::spawn_blocking(move || StudentCatalog::load_from_directory(&data_dir, &options))
            .await
            .context("Catalog loading task failed")?
            .with_context(|| {
                format!(
                    "Failed to load student catalog from {}",
                    config.loader.data_dir.display()
                )
            })?;

    if stats.has_errors() {
        warn!(
            "{} of {} source files could not be read",
            stats.files_failed, stats.files_discovered
        );
    }
    info!("{}", stats.summary());

    Ok((catalog, stats))
}

/// Resolves when Ctrl+C is received
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
