//! Runtime context for CLI commands

use anyhow::{Context, Result};
use dq_ai::{CompletionClient, OpenAiClient};
use dq_core::{Config, ConnectionParams, CoreError};
use dq_db::{MySqlCatalog, SchemaReader};
use std::path::Path;
use std::sync::Arc;

/// Runtime context: merged configuration plus the clients commands need
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Connection parameters after flag overrides
    pub connection: ConnectionParams,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Build a context from global arguments.
    ///
    /// Config comes from --config, else dataquill.yml in the project
    /// directory, else defaults; connection flags override file values.
    pub fn new(args: &crate::cli::GlobalArgs) -> Result<Self> {
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            match Config::load_from_dir(Path::new(&args.project_dir)) {
                Ok(config) => config,
                Err(CoreError::ConfigNotFound { .. }) => Config::default(),
                Err(e) => return Err(e).context("Failed to load project configuration"),
            }
        };

        let connection = ConnectionParams {
            host: args
                .host
                .clone()
                .unwrap_or_else(|| config.database.host.clone()),
            port: args.port.or(config.database.port),
            user: args
                .user
                .clone()
                .unwrap_or_else(|| config.database.user.clone()),
            password: args
                .password
                .clone()
                .unwrap_or_else(|| config.database.password.clone()),
            database: args
                .database
                .clone()
                .unwrap_or_else(|| config.database.database.clone()),
        };

        Ok(Self {
            config,
            connection,
            verbose: args.verbose,
        })
    }

    /// Schema reader over the MySQL catalog
    pub fn schema_reader(&self) -> SchemaReader {
        SchemaReader::new(Arc::new(MySqlCatalog))
    }

    /// Completion client from the AI config section. The API key falls
    /// back to OPENAI_API_KEY when the config leaves it unset.
    pub fn completion_client(&self) -> Arc<dyn CompletionClient> {
        let mut ai = self.config.ai.clone();
        if ai.api_key.is_none() {
            ai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Arc::new(OpenAiClient::new(ai))
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
