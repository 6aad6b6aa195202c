//! Socialgraph CLI binary.

use anyhow::Result;
use socialgraph::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the socialgraph CLI.
///
/// Uses tokio's current_thread runtime; the graph is single-threaded and the
/// only async work is reading the configuration file.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with command output.
    // Example: RUST_LOG=socialgraph=debug socialgraph --demo
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("socialgraph=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting socialgraph CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Socialgraph CLI completed successfully");
    Ok(())
}
