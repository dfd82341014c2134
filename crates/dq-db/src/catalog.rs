//! Catalog trait definitions

use crate::error::DbResult;
use async_trait::async_trait;
use dq_core::{ColumnDescriptor, ConnectionParams, SampleRow};

/// One open introspection session against a database.
///
/// Sessions are owned exclusively by a single schema read and must be
/// closed by the caller on every exit path.
#[async_trait]
pub trait CatalogSession: Send {
    /// List the table names visible in the target schema, in the order
    /// the catalog returns them
    async fn list_tables(&mut self) -> DbResult<Vec<String>>;

    /// Fetch column metadata for one table in declared (ordinal) order
    async fn list_columns(&mut self, table: &str) -> DbResult<Vec<ColumnDescriptor>>;

    /// Fetch up to `limit` sample rows for one table
    async fn fetch_sample_rows(&mut self, table: &str, limit: usize) -> DbResult<Vec<SampleRow>>;

    /// Release the underlying connection; idempotent
    async fn close(&mut self) -> DbResult<()>;
}

/// Opens catalog sessions from per-call connection parameters.
///
/// Implementations must be Send + Sync so one connector can serve
/// concurrent, independent schema reads.
#[async_trait]
pub trait CatalogConnector: Send + Sync {
    /// Establish a connection and return an open session
    async fn connect(&self, params: &ConnectionParams) -> DbResult<Box<dyn CatalogSession>>;
}
