//! Analysis pipelines
//!
//! Each pipeline validates its input, renders the matching prompt, and
//! makes one completion call. Errors propagate to the caller; only the
//! suite orchestrator converts them into data (see [`crate::suite`]).

use crate::client::CompletionClient;
use crate::error::{AiError, AiResult};
use crate::prompt::PromptBuilder;
use dq_core::{AnomalyReport, ColumnDescriptor, SampleRow, SchemaSnapshot};
use std::sync::Arc;

/// Generates a data quality test suite for one table
pub struct TestGenerationPipeline {
    prompts: PromptBuilder,
    client: Arc<dyn CompletionClient>,
}

impl TestGenerationPipeline {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            prompts: PromptBuilder::new(),
            client,
        }
    }

    /// Generate test text for one table from its columns and samples
    pub async fn generate_tests(
        &self,
        table_name: &str,
        columns: &[ColumnDescriptor],
        sample_rows: &[SampleRow],
    ) -> AiResult<String> {
        if table_name.trim().is_empty() {
            return Err(AiError::Validation("table name is required".to_string()));
        }
        if columns.is_empty() {
            return Err(AiError::Validation(format!(
                "table '{table_name}' has no column metadata"
            )));
        }

        let prompt = self
            .prompts
            .build_test_generation_prompt(table_name, columns, sample_rows)?;
        self.client.complete(&prompt).await
    }
}

/// Analyzes one SQL statement for anomalies
pub struct AnomalyDetectionPipeline {
    prompts: PromptBuilder,
    client: Arc<dyn CompletionClient>,
}

impl AnomalyDetectionPipeline {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            prompts: PromptBuilder::new(),
            client,
        }
    }

    /// Analyze a SQL statement, optionally grounding the analysis in a
    /// schema snapshot. An absent snapshot renders a placeholder rather
    /// than failing.
    pub async fn detect_anomalies(
        &self,
        sql: &str,
        schema_context: Option<&SchemaSnapshot>,
    ) -> AiResult<AnomalyReport> {
        if sql.trim().is_empty() {
            return Err(AiError::Validation("SQL query is required".to_string()));
        }

        let prompt = self
            .prompts
            .build_anomaly_detection_prompt(sql, schema_context)?;
        let analysis_text = self.client.complete(&prompt).await?;

        Ok(AnomalyReport {
            source_query: sql.to_string(),
            schema_context_used: schema_context.is_some(),
            analysis_text,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
