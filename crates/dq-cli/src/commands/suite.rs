//! Suite command implementation

use anyhow::{Context, Result};
use dq_ai::SuiteOrchestrator;
use dq_db::MySqlCatalog;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{GlobalArgs, SuiteArgs};
use crate::context::RuntimeContext;

/// Execute the suite command
pub async fn execute(_args: &SuiteArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let orchestrator = SuiteOrchestrator::new(Arc::new(MySqlCatalog), ctx.completion_client());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!(
        "generating test suite for '{}'...",
        ctx.connection.database
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = orchestrator.generate_suite(&ctx.connection).await;
    spinner.finish_and_clear();

    let result = result.context("Suite generation failed")?;

    ctx.verbose(&format!(
        "{} tables processed, {} failed",
        result.total_tables,
        result.failure_count()
    ));

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
