use super::*;
use crate::catalog::{CatalogConnector, CatalogSession};
use crate::error::DbError;
use async_trait::async_trait;
use dq_core::{ColumnDescriptor, ConnectionParams, SampleRow};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn params() -> ConnectionParams {
    ConnectionParams {
        host: "localhost".to_string(),
        port: None,
        user: "root".to_string(),
        password: String::new(),
        database: "shop".to_string(),
    }
}

fn column(name: &str, data_type: &str, nullable: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullable,
        default_value: None,
    }
}

/// Scripted in-memory catalog for exercising the reader
#[derive(Clone, Default)]
struct FakeCatalog {
    tables: Vec<String>,
    columns: HashMap<String, Vec<ColumnDescriptor>>,
    fail_connect: bool,
    fail_columns_for: Option<String>,
    fail_samples_for: Vec<String>,
    closed: Arc<AtomicUsize>,
}

impl FakeCatalog {
    fn with_tables(tables: &[&str]) -> Self {
        let mut catalog = FakeCatalog {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };
        for table in tables {
            catalog.columns.insert(
                table.to_string(),
                vec![column("id", "int", false), column("email", "varchar", true)],
            );
        }
        catalog
    }
}

struct FakeSession {
    catalog: FakeCatalog,
}

#[async_trait]
impl CatalogConnector for FakeCatalog {
    async fn connect(&self, _params: &ConnectionParams) -> DbResult<Box<dyn CatalogSession>> {
        if self.fail_connect {
            return Err(DbError::ConnectionError("access denied".to_string()));
        }
        Ok(Box::new(FakeSession {
            catalog: self.clone(),
        }))
    }
}

#[async_trait]
impl CatalogSession for FakeSession {
    async fn list_tables(&mut self) -> DbResult<Vec<String>> {
        Ok(self.catalog.tables.clone())
    }

    async fn list_columns(&mut self, table: &str) -> DbResult<Vec<ColumnDescriptor>> {
        if self.catalog.fail_columns_for.as_deref() == Some(table) {
            return Err(DbError::QueryError(format!(
                "listing columns of '{table}': lost connection"
            )));
        }
        Ok(self.catalog.columns.get(table).cloned().unwrap_or_default())
    }

    async fn fetch_sample_rows(&mut self, table: &str, limit: usize) -> DbResult<Vec<SampleRow>> {
        if self.catalog.fail_samples_for.iter().any(|t| t == table) {
            return Err(DbError::SampleFetch(format!(
                "sampling '{table}': permission denied"
            )));
        }
        let mut row = SampleRow::new();
        row.insert("id".to_string(), serde_json::json!(1));
        Ok(vec![row; limit.min(1)])
    }

    async fn close(&mut self) -> DbResult<()> {
        self.catalog.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn test_snapshot_covers_exactly_the_catalog_tables() {
    let catalog = FakeCatalog::with_tables(&["orders", "users", "payments"]);
    let reader = SchemaReader::new(Arc::new(catalog));

    let snapshot = reader.read_schema(&params()).await.unwrap();

    assert_eq!(
        snapshot.table_names().collect::<Vec<_>>(),
        vec!["orders", "users", "payments"]
    );
}

#[tokio::test]
async fn test_sample_failure_degrades_to_empty_rows() {
    let mut catalog = FakeCatalog::with_tables(&["users", "orders"]);
    catalog.fail_samples_for = vec!["users".to_string()];
    let reader = SchemaReader::new(Arc::new(catalog));

    let snapshot = reader.read_schema(&params()).await.unwrap();

    // The failing table stays in the snapshot with full column data.
    let users = snapshot.get("users").unwrap();
    assert!(users.sample_rows.is_empty());
    assert_eq!(users.columns.len(), 2);

    let orders = snapshot.get("orders").unwrap();
    assert_eq!(orders.sample_rows.len(), 1);
}

#[tokio::test]
async fn test_column_failure_is_fatal() {
    let mut catalog = FakeCatalog::with_tables(&["users", "orders"]);
    catalog.fail_columns_for = Some("orders".to_string());
    let closed = catalog.closed.clone();
    let reader = SchemaReader::new(Arc::new(catalog));

    let err = reader.read_schema(&params()).await.unwrap_err();

    assert!(matches!(err, DbError::QueryError(_)));
    // The session is released even though the read failed.
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    let catalog = FakeCatalog {
        fail_connect: true,
        ..Default::default()
    };
    let reader = SchemaReader::new(Arc::new(catalog));

    let err = reader.read_schema(&params()).await.unwrap_err();
    assert!(matches!(err, DbError::ConnectionError(_)));
}

#[tokio::test]
async fn test_session_closed_after_successful_read() {
    let catalog = FakeCatalog::with_tables(&["users"]);
    let closed = catalog.closed.clone();
    let reader = SchemaReader::new(Arc::new(catalog));

    reader.read_schema(&params()).await.unwrap();
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_session_closed_when_sampling_fails() {
    let mut catalog = FakeCatalog::with_tables(&["users"]);
    catalog.fail_samples_for = vec!["users".to_string()];
    let closed = catalog.closed.clone();
    let reader = SchemaReader::new(Arc::new(catalog));

    reader.read_schema(&params()).await.unwrap();
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rereading_unchanged_catalog_is_idempotent() {
    let catalog = FakeCatalog::with_tables(&["users", "orders"]);
    let close_count = catalog.closed.clone();
    let reader = SchemaReader::new(Arc::new(catalog));

    let first = reader.read_schema(&params()).await.unwrap();
    let second = reader.read_schema(&params()).await.unwrap();

    assert_eq!(first, second);
    // One session per read, both released.
    assert_eq!(close_count.load(Ordering::SeqCst), 2);
}
