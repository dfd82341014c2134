//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// DataQuill - AI-assisted data quality for relational databases
#[derive(Parser, Debug)]
#[command(name = "dq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Database host (overrides dataquill.yml)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Database port (overrides dataquill.yml)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Database user (overrides dataquill.yml)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Database password (overrides dataquill.yml)
    #[arg(long, global = true, env = "DQ_PASSWORD")]
    pub password: Option<String>,

    /// Database name (overrides dataquill.yml)
    #[arg(long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the live database schema and print it as JSON
    Schema(SchemaArgs),

    /// Generate data quality tests for one table
    Generate(GenerateArgs),

    /// Analyze a SQL statement for anomalies
    Detect(DetectArgs),

    /// Generate a full test suite, one entry per table
    Suite(SuiteArgs),

    /// Run the external test tool against the project
    RunTests(RunTestsArgs),
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Table to generate tests for
    #[arg(short, long)]
    pub table: String,
}

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// SQL statement to analyze
    #[arg(long)]
    pub sql: Option<String>,

    /// Include the live schema as analysis context
    #[arg(long)]
    pub with_schema: bool,
}

/// Arguments for the suite command
#[derive(Args, Debug)]
pub struct SuiteArgs {}

/// Arguments for the run-tests command
#[derive(Args, Debug)]
pub struct RunTestsArgs {
    /// Test runner executable (overrides dataquill.yml)
    #[arg(long)]
    pub program: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
