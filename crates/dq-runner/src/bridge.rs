//! Test runner subprocess bridge

use crate::error::{RunnerError, RunnerResult};
use dq_core::RunOutcome;
use std::path::Path;

/// Launches the external test tool against a project directory.
///
/// The bridge resolves once the process terminates, with both standard
/// streams captured in full. No timeout is applied: a hung runner
/// blocks the call indefinitely.
pub struct TestRunnerBridge {
    program: String,
    args: Vec<String>,
}

impl TestRunnerBridge {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Run the configured tool with the given project directory as its
    /// working directory.
    ///
    /// A nonzero exit code resolves as a normal [`RunOutcome`]; only a
    /// subprocess that cannot be started at all is an error.
    pub async fn run_tests(&self, project_path: &Path) -> RunnerResult<RunOutcome> {
        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_path)
            .output()
            .await
            .map_err(|e| {
                RunnerError::Launch(format!(
                    "could not start '{}' in {}: {e}",
                    self.program,
                    project_path.display()
                ))
            })?;

        Ok(RunOutcome {
            // -1 when the process was terminated by a signal
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

impl Default for TestRunnerBridge {
    fn default() -> Self {
        Self::new("dbt", vec!["test".to_string()])
    }
}

#[cfg(test)]
#[path = "bridge_test.rs"]
mod tests;
