//! Schema reader
//!
//! Turns per-call connection parameters into a [`SchemaSnapshot`]. Each
//! read owns its catalog session exclusively and releases it on every
//! exit path; nothing is cached across reads.

use crate::catalog::{CatalogConnector, CatalogSession};
use crate::error::DbResult;
use dq_core::{ConnectionParams, SchemaSnapshot, TableSnapshot, SAMPLE_ROW_LIMIT};
use std::sync::Arc;

/// Reads live database schemas through a [`CatalogConnector`]
pub struct SchemaReader {
    connector: Arc<dyn CatalogConnector>,
}

impl SchemaReader {
    /// Create a reader over the given connector
    pub fn new(connector: Arc<dyn CatalogConnector>) -> Self {
        Self { connector }
    }

    /// Read the full schema visible to the supplied credentials.
    ///
    /// Connection failures and catalog/column query failures are fatal
    /// to the whole read; a failed sample fetch degrades that table to
    /// an empty sample. The session is closed before returning, whether
    /// the read succeeded or not.
    pub async fn read_schema(&self, params: &ConnectionParams) -> DbResult<SchemaSnapshot> {
        let mut session = self.connector.connect(params).await?;
        let outcome = Self::read_all(session.as_mut()).await;
        if let Err(e) = session.close().await {
            log::warn!("failed to close catalog session: {e}");
        }
        outcome
    }

    async fn read_all(session: &mut dyn CatalogSession) -> DbResult<SchemaSnapshot> {
        let table_names = session.list_tables().await?;

        let mut tables = Vec::with_capacity(table_names.len());
        for table_name in table_names {
            let columns = session.list_columns(&table_name).await?;
            let sample_rows = match session
                .fetch_sample_rows(&table_name, SAMPLE_ROW_LIMIT)
                .await
            {
                Ok(rows) => rows,
                Err(e) => {
                    log::warn!("continuing without sample rows for '{table_name}': {e}");
                    Vec::new()
                }
            };

            tables.push(TableSnapshot {
                table_name,
                columns,
                sample_rows,
            });
        }

        Ok(SchemaSnapshot::new(tables))
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod tests;
