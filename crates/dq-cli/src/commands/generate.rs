//! Generate command implementation

use anyhow::{bail, Context, Result};
use dq_ai::TestGenerationPipeline;
use serde::Serialize;

use crate::cli::{GenerateArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Generated tests for one table
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    table_name: &'a str,
    tests: String,
}

/// Execute the generate command
pub async fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let snapshot = ctx
        .schema_reader()
        .read_schema(&ctx.connection)
        .await
        .context("Failed to read database schema")?;

    let Some(table) = snapshot.get(&args.table) else {
        bail!(
            "table '{}' not found in database '{}'",
            args.table,
            ctx.connection.database
        );
    };

    ctx.verbose(&format!(
        "generating tests for '{}' ({} columns, {} sample rows)",
        table.table_name,
        table.columns.len(),
        table.sample_rows.len()
    ));

    let pipeline = TestGenerationPipeline::new(ctx.completion_client());
    let tests = pipeline
        .generate_tests(&table.table_name, &table.columns, &table.sample_rows)
        .await
        .context("Test generation failed")?;

    let output = GenerateOutput {
        table_name: &table.table_name,
        tests,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
