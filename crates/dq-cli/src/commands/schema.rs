//! Schema command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, SchemaArgs};
use crate::context::RuntimeContext;

/// Execute the schema command
pub async fn execute(_args: &SchemaArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "reading schema of '{}' on {}",
        ctx.connection.database, ctx.connection.host
    ));

    let snapshot = ctx
        .schema_reader()
        .read_schema(&ctx.connection)
        .await
        .context("Failed to read database schema")?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
