//! Prompt templates
//!
//! Fixed analysis templates rendered with minijinja. The builder only
//! formats its inputs into the template - it never validates the SQL or
//! schema it is handed.

use crate::error::AiResult;
use dq_core::{ColumnDescriptor, SampleRow, SchemaSnapshot};
use minijinja::{context, Environment};

const TEST_GENERATION_TEMPLATE: &str = r#"You are a data quality engineer writing dbt tests.

Analyze the table below and generate a complete data quality test suite for it.

Table: {{ table_name }}

Columns:
{{ columns }}

Sample rows ({{ sample_count }} shown):
{{ sample_rows }}

Generate tests covering:
1. Uniqueness tests for primary keys and other identifier columns
2. not_null tests for columns that must always be populated
3. accepted_values tests for low-cardinality categorical columns
4. relationships tests for columns that look like foreign keys
5. Custom SQL tests for domain rules the sample data implies
6. Freshness checks for timestamp columns
7. Volume checks with a reasonable expected row-count range
8. Statistical checks (ranges, outliers) for numeric columns

Return a dbt schema.yml tests block, followed by any singular test SQL,
each in its own fenced code block. Add a one-line comment above every
test explaining what it guards against. Do not include prose outside the
code blocks."#;

const ANOMALY_DETECTION_TEMPLATE: &str = r#"You are a SQL reviewer for a data quality platform.

Analyze the SQL statement below for anomalies.

SQL:
{{ sql }}

Schema context:
{{ schema_context }}

Check for:
1. Syntax errors or constructs that would fail at runtime
2. Logic errors: wrong join keys, inverted predicates, unintended cartesian products
3. Performance concerns: missing filters, full scans, non-sargable predicates
4. Data quality risks: implicit casts, NULL handling, silent truncation
5. SQL injection risks: string-built predicates, unparameterized input
6. Deviations from SQL best practice

Report every finding as a block:
[SEVERITY: critical|high|medium|low|info]
Issue: <one-line summary>
Detail: <what is wrong and where>
Suggestion: <how to fix it>

If the statement looks sound, return a single info block saying so."#;

/// Placeholder rendered when anomaly detection runs without schema context
const NO_SCHEMA_CONTEXT: &str = "(no schema context provided)";

/// Renders the fixed analysis templates
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Render the test-generation prompt for one table
    pub fn build_test_generation_prompt(
        &self,
        table_name: &str,
        columns: &[ColumnDescriptor],
        sample_rows: &[SampleRow],
    ) -> AiResult<String> {
        let columns_json = serde_json::to_string_pretty(columns)?;
        let rows_json = serde_json::to_string_pretty(sample_rows)?;

        let prompt = self.env.render_str(
            TEST_GENERATION_TEMPLATE,
            context! {
                table_name,
                columns => columns_json,
                sample_rows => rows_json,
                sample_count => sample_rows.len(),
            },
        )?;
        Ok(prompt)
    }

    /// Render the anomaly-detection prompt for one SQL statement
    pub fn build_anomaly_detection_prompt(
        &self,
        sql: &str,
        schema_context: Option<&SchemaSnapshot>,
    ) -> AiResult<String> {
        let context_text = match schema_context {
            Some(snapshot) => serde_json::to_string_pretty(snapshot)?,
            None => NO_SCHEMA_CONTEXT.to_string(),
        };

        let prompt = self.env.render_str(
            ANOMALY_DETECTION_TEMPLATE,
            context! {
                sql,
                schema_context => context_text,
            },
        )?;
        Ok(prompt)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
