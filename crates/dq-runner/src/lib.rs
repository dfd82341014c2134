//! dq-runner - External test runner bridge for DataQuill
//!
//! This crate launches the external test-execution tool (dbt by
//! default) as a subprocess and captures its streams and exit code.

pub mod bridge;
pub mod error;

pub use bridge::TestRunnerBridge;
pub use error::{RunnerError, RunnerResult};
