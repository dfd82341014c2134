//! Configuration types and parsing for dataquill.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main project configuration from dataquill.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Completion service configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// External test runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            database: DatabaseConfig::default(),
            ai: AiConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

/// Database connection defaults; any field can be overridden per call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_host")]
    pub host: String,

    /// Database port (backend default when unset)
    #[serde(default)]
    pub port: Option<u16>,

    /// Database user
    #[serde(default)]
    pub user: String,

    /// Database password
    #[serde(default)]
    pub password: String,

    /// Database (schema) name
    #[serde(default)]
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            user: String::new(),
            password: String::new(),
            database: String::new(),
        }
    }
}

/// Completion service configuration.
///
/// Passed explicitly into the completion client constructor; pipeline
/// logic never reads it from ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    /// API key; when unset the request is sent without authorization
    /// (local OpenAI-compatible servers accept this)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature; 0.0 keeps generation deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token cap, service default when unset
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

/// External test runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Test runner executable
    #[serde(default = "default_runner_program")]
    pub program: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_runner_program(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> CoreResult<Config> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a project directory, trying
    /// dataquill.yml then dataquill.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Config> {
        let yml_path = dir.join("dataquill.yml");
        let yaml_path = dir.join("dataquill.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }
}

fn default_name() -> String {
    "dataquill".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_runner_program() -> String {
    "dbt".to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
