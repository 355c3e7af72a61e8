//! Command implementations for the admission lookup CLI
//!
//! Each command is implemented in its own module:
//! - `serve`: load the catalog and run the HTTP API
//! - `inspect`: load the catalog and report on it
//! - `query`: load the catalog and answer one lookup

pub mod inspect;
pub mod query;
pub mod serve;
pub mod shared;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler. `args.command` must be set.
pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Serve(serve_args)) => serve::run_serve(serve_args).await,
        Some(Commands::Inspect(inspect_args)) => {
            inspect::run_inspect(inspect_args).await.map(|_| ())
        }
        Some(Commands::Query(query_args)) => query::run_query(query_args).await.map(|_| ()),
        None => anyhow::bail!("No command given; run with --help for usage"),
    }
}
