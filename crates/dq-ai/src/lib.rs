//! dq-ai - AI analysis layer for DataQuill
//!
//! This crate renders the analysis prompt templates, wraps the external
//! completion service, and composes the two analysis pipelines plus the
//! suite orchestrator that fans test generation out across a schema
//! snapshot.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod suite;

pub use client::{CompletionClient, OpenAiClient};
pub use error::{AiError, AiResult};
pub use pipeline::{AnomalyDetectionPipeline, TestGenerationPipeline};
pub use prompt::PromptBuilder;
pub use suite::SuiteOrchestrator;
