//! DataQuill CLI - AI-assisted data quality for relational databases

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{detect, generate, run_tests, schema, suite};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Schema(args) => schema::execute(args, &cli.global).await,
        cli::Commands::Generate(args) => generate::execute(args, &cli.global).await,
        cli::Commands::Detect(args) => detect::execute(args, &cli.global).await,
        cli::Commands::Suite(args) => suite::execute(args, &cli.global).await,
        cli::Commands::RunTests(args) => run_tests::execute(args, &cli.global).await,
    }
}
