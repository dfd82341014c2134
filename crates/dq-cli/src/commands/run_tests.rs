//! Run-tests command implementation

use anyhow::{Context, Result};
use dq_runner::TestRunnerBridge;
use std::path::Path;

use crate::cli::{GlobalArgs, RunTestsArgs};
use crate::context::RuntimeContext;

/// Execute the run-tests command
pub async fn execute(args: &RunTestsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let program = args
        .program
        .clone()
        .unwrap_or_else(|| ctx.config.runner.program.clone());
    let bridge = TestRunnerBridge::new(program, vec!["test".to_string()]);

    ctx.verbose(&format!("running tests in {}", global.project_dir));

    let outcome = bridge
        .run_tests(Path::new(&global.project_dir))
        .await
        .context("Failed to launch test runner")?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    // Mirror the runner's failure in our own exit code.
    if outcome.exit_code != 0 {
        std::process::exit(if outcome.exit_code < 0 {
            1
        } else {
            outcome.exit_code
        });
    }

    Ok(())
}
