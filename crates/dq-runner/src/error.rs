//! Error types for dq-runner

use thiserror::Error;

/// Test runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Launch error (R001) - the runner subprocess could not be started
    /// at all. A started runner that exits nonzero is NOT an error; it
    /// resolves as a normal outcome.
    #[error("[R001] Failed to launch test runner: {0}")]
    Launch(String),
}

/// Result type alias for RunnerError
pub type RunnerResult<T> = Result<T, RunnerError>;
