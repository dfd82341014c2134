//! Suite orchestrator
//!
//! Drives one full suite generation: read the schema, then generate
//! tests table by table. Per-table failures are recorded in the result
//! and never abort the remaining tables - this is the one place in the
//! pipeline where an error becomes data instead of propagating.

use crate::client::CompletionClient;
use crate::pipeline::TestGenerationPipeline;
use dq_core::{ConnectionParams, GenerationResult, SuiteEntry, TableOutcome};
use dq_db::{CatalogConnector, DbResult, SchemaReader};
use std::sync::Arc;

/// Generates a full test suite for every table in a database
pub struct SuiteOrchestrator {
    reader: SchemaReader,
    pipeline: TestGenerationPipeline,
}

impl SuiteOrchestrator {
    pub fn new(connector: Arc<dyn CatalogConnector>, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            reader: SchemaReader::new(connector),
            pipeline: TestGenerationPipeline::new(client),
        }
    }

    /// Generate tests for every table visible to the connection.
    ///
    /// A schema read failure fails the whole call - there is no partial
    /// schema to work from. Generation then runs sequentially in
    /// snapshot order, one completion request in flight at a time, so
    /// results are deterministic and upstream load is bounded.
    pub async fn generate_suite(&self, params: &ConnectionParams) -> DbResult<GenerationResult> {
        let snapshot = self.reader.read_schema(params).await?;

        let mut entries = Vec::with_capacity(snapshot.len());
        for table in snapshot.tables() {
            let outcome = match self
                .pipeline
                .generate_tests(&table.table_name, &table.columns, &table.sample_rows)
                .await
            {
                Ok(text) => TableOutcome::Generated(text),
                Err(e) => {
                    log::warn!(
                        "test generation failed for '{}', continuing with remaining tables: {e}",
                        table.table_name
                    );
                    TableOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };

            entries.push(SuiteEntry {
                table: table.table_name.clone(),
                outcome,
            });
        }

        Ok(GenerationResult::new(entries))
    }
}

#[cfg(test)]
#[path = "suite_test.rs"]
mod tests;
