//! Top-level run orchestration.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use roster_source::PgSource;

use crate::config::Config;
use crate::pipeline::run_export;
use crate::types::RunSummary;

/// Load configuration, open the database, and execute one export run.
///
/// The sqlx driver is async; a current-thread runtime keeps the run
/// single-threaded and every await strictly sequential.
///
/// # Errors
///
/// Configuration, connection, bulk-query, and output-file failures abort the
/// run. Everything else is recovered and reported in the summary.
pub fn run() -> Result<RunSummary> {
    let config = Config::from_env()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    runtime.block_on(run_once(&config))
}

async fn run_once(config: &Config) -> Result<RunSummary> {
    info!("execution started at {}", Local::now().format("%H:%M:%S"));
    let source = PgSource::connect(&config.db)
        .await
        .context("connect to student database")?;
    let summary = run_export(&source, config).await?;
    info!(
        emitted = summary.emitted,
        excluded = summary.excluded,
        unchanged = summary.unchanged,
        failed = summary.failures.len(),
        uploaded = summary.uploaded,
        "execution ended at {}",
        Local::now().format("%H:%M:%S")
    );
    Ok(summary)
}
