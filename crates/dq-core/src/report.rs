//! Result types returned across the transport boundary

use serde::{Deserialize, Serialize};

/// Outcome of test generation for one table.
///
/// Serializes untagged: a successful entry is a plain string of
/// generated test text, a failed entry is `{"error": "..."}`. Consumers
/// match on the variant instead of sniffing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableOutcome {
    /// Generated test text
    Generated(String),

    /// Generation failed for this table; the rest of the suite is unaffected
    Failed { error: String },
}

impl TableOutcome {
    /// True for the `Failed` variant
    pub fn is_failure(&self) -> bool {
        matches!(self, TableOutcome::Failed { .. })
    }
}

/// One table's entry in a generated suite
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteEntry {
    /// Table the entry was generated for
    pub table: String,

    /// Generated text or error descriptor
    pub outcome: TableOutcome,
}

/// Aggregate result of a full suite generation.
///
/// Holds exactly one entry per table in the schema snapshot it was
/// derived from, in snapshot order. Serializes `test_suite` as a JSON
/// map of table name to outcome.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Per-table outcomes in snapshot order
    #[serde(serialize_with = "crate::serde_helpers::suite_entries_as_map")]
    pub test_suite: Vec<SuiteEntry>,

    /// Total number of tables processed
    pub total_tables: usize,
}

impl GenerationResult {
    /// Assemble a result; the total is always the entry count
    pub fn new(test_suite: Vec<SuiteEntry>) -> Self {
        let total_tables = test_suite.len();
        Self {
            test_suite,
            total_tables,
        }
    }

    /// Look up one table's outcome
    pub fn get(&self, table: &str) -> Option<&TableOutcome> {
        self.test_suite
            .iter()
            .find(|e| e.table == table)
            .map(|e| &e.outcome)
    }

    /// Number of tables whose generation failed
    pub fn failure_count(&self) -> usize {
        self.test_suite
            .iter()
            .filter(|e| e.outcome.is_failure())
            .count()
    }
}

/// Anomaly analysis for one SQL statement
#[derive(Debug, Clone, Serialize)]
pub struct AnomalyReport {
    /// The statement that was analyzed, echoed back
    pub source_query: String,

    /// Whether schema context was included in the analysis
    pub schema_context_used: bool,

    /// Severity-tagged analysis text from the completion service
    pub analysis_text: String,
}

/// One completed external test-runner invocation.
///
/// A nonzero exit code is a normal outcome, not an error; only a failure
/// to launch the runner at all is surfaced as an error.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
