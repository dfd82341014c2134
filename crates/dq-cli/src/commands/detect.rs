//! Detect command implementation

use anyhow::{Context, Result};
use dq_ai::AnomalyDetectionPipeline;

use crate::cli::{DetectArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the detect command
pub async fn execute(args: &DetectArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    // An absent --sql flows through as empty input so the pipeline's
    // own validation produces the boundary error message.
    let sql = args.sql.clone().unwrap_or_default();

    let schema_context = if args.with_schema {
        ctx.verbose("reading schema for analysis context");
        let snapshot = ctx
            .schema_reader()
            .read_schema(&ctx.connection)
            .await
            .context("Failed to read database schema")?;
        Some(snapshot)
    } else {
        None
    };

    let pipeline = AnomalyDetectionPipeline::new(ctx.completion_client());
    let report = pipeline
        .detect_anomalies(&sql, schema_context.as_ref())
        .await
        .context("Anomaly detection failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
