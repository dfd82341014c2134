use super::*;
use crate::error::{AiError, AiResult};
use async_trait::async_trait;
use dq_core::{ColumnDescriptor, SampleRow};
use dq_db::{CatalogSession, DbError};
use std::sync::Mutex;

fn params() -> ConnectionParams {
    ConnectionParams {
        host: "localhost".to_string(),
        port: None,
        user: "root".to_string(),
        password: String::new(),
        database: "shop".to_string(),
    }
}

/// Catalog exposing fixed tables, each with one int column
#[derive(Clone)]
struct FakeCatalog {
    tables: Vec<String>,
    fail_connect: bool,
}

impl FakeCatalog {
    fn with_tables(tables: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            fail_connect: false,
        }
    }
}

struct FakeSession {
    tables: Vec<String>,
}

#[async_trait]
impl CatalogConnector for FakeCatalog {
    async fn connect(&self, _params: &ConnectionParams) -> DbResult<Box<dyn CatalogSession>> {
        if self.fail_connect {
            return Err(DbError::ConnectionError("access denied".to_string()));
        }
        Ok(Box::new(FakeSession {
            tables: self.tables.clone(),
        }))
    }
}

#[async_trait]
impl CatalogSession for FakeSession {
    async fn list_tables(&mut self) -> DbResult<Vec<String>> {
        Ok(self.tables.clone())
    }

    async fn list_columns(&mut self, _table: &str) -> DbResult<Vec<ColumnDescriptor>> {
        Ok(vec![ColumnDescriptor {
            name: "id".to_string(),
            data_type: "int".to_string(),
            nullable: false,
            default_value: None,
        }])
    }

    async fn fetch_sample_rows(&mut self, _table: &str, _limit: usize) -> DbResult<Vec<SampleRow>> {
        Ok(Vec::new())
    }

    async fn close(&mut self) -> DbResult<()> {
        Ok(())
    }
}

/// Completion client that fails only for the configured table
#[derive(Default)]
struct SelectiveClient {
    fail_for_table: Option<String>,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl CompletionClient for SelectiveClient {
    async fn complete(&self, prompt: &str) -> AiResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(table) = &self.fail_for_table {
            if prompt.contains(&format!("Table: {table}")) {
                return Err(AiError::Completion("rate limited".to_string()));
            }
        }
        Ok("generated tests".to_string())
    }
}

#[tokio::test]
async fn test_one_failing_table_does_not_abort_the_suite() {
    let connector = Arc::new(FakeCatalog::with_tables(&["orders", "payments", "users"]));
    let client = Arc::new(SelectiveClient {
        fail_for_table: Some("payments".to_string()),
        ..Default::default()
    });
    let orchestrator = SuiteOrchestrator::new(connector, client);

    let result = orchestrator.generate_suite(&params()).await.unwrap();

    assert_eq!(result.total_tables, 3);
    assert_eq!(result.test_suite.len(), 3);
    assert_eq!(result.failure_count(), 1);
    assert!(matches!(
        result.get("orders"),
        Some(TableOutcome::Generated(_))
    ));
    assert!(matches!(
        result.get("users"),
        Some(TableOutcome::Generated(_))
    ));
    match result.get("payments") {
        Some(TableOutcome::Failed { error }) => {
            assert!(error.contains("rate limited"));
        }
        other => panic!("expected failure entry for payments, got {other:?}"),
    }
}

#[tokio::test]
async fn test_result_follows_snapshot_order() {
    let connector = Arc::new(FakeCatalog::with_tables(&["zebra", "alpha", "middle"]));
    let client = Arc::new(SelectiveClient::default());
    let orchestrator = SuiteOrchestrator::new(connector, client.clone());

    let result = orchestrator.generate_suite(&params()).await.unwrap();

    let order: Vec<&str> = result.test_suite.iter().map(|e| e.table.as_str()).collect();
    assert_eq!(order, vec!["zebra", "alpha", "middle"]);

    // One sequential completion call per table, issued in snapshot order.
    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("Table: zebra"));
    assert!(prompts[1].contains("Table: alpha"));
    assert!(prompts[2].contains("Table: middle"));
}

#[tokio::test]
async fn test_schema_read_failure_fails_the_whole_call() {
    let connector = Arc::new(FakeCatalog {
        tables: Vec::new(),
        fail_connect: true,
    });
    let client = Arc::new(SelectiveClient::default());
    let orchestrator = SuiteOrchestrator::new(connector, client.clone());

    let err = orchestrator.generate_suite(&params()).await.unwrap_err();

    assert!(matches!(err, DbError::ConnectionError(_)));
    assert!(client.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_database_yields_empty_suite() {
    let connector = Arc::new(FakeCatalog::with_tables(&[]));
    let client = Arc::new(SelectiveClient::default());
    let orchestrator = SuiteOrchestrator::new(connector, client);

    let result = orchestrator.generate_suite(&params()).await.unwrap();
    assert_eq!(result.total_tables, 0);
    assert!(result.test_suite.is_empty());
}
