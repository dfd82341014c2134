//! MySQL catalog backend
//!
//! Introspection runs against information_schema, matching what the
//! database itself reports: table list, ordinal column metadata, and a
//! `SELECT * ... LIMIT n` row sample per table.

use crate::catalog::{CatalogConnector, CatalogSession};
use crate::error::{DbError, DbResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use dq_core::{ColumnDescriptor, ConnectionParams, SampleRow};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, ConnectOptions, Connection, Row};

const DEFAULT_PORT: u16 = 3306;

const LIST_TABLES_SQL: &str = "SELECT table_name AS table_name \
     FROM information_schema.tables \
     WHERE table_schema = ? \
     ORDER BY table_name";

const LIST_COLUMNS_SQL: &str = "SELECT column_name AS column_name, \
            data_type AS data_type, \
            is_nullable AS is_nullable, \
            column_default AS column_default \
     FROM information_schema.columns \
     WHERE table_schema = ? AND table_name = ? \
     ORDER BY ordinal_position";

/// MySQL catalog connector
pub struct MySqlCatalog;

#[async_trait]
impl CatalogConnector for MySqlCatalog {
    async fn connect(&self, params: &ConnectionParams) -> DbResult<Box<dyn CatalogSession>> {
        let options = MySqlConnectOptions::new()
            .host(&params.host)
            .port(params.port.unwrap_or(DEFAULT_PORT))
            .username(&params.user)
            .password(&params.password)
            .database(&params.database);

        let conn = options
            .connect()
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        Ok(Box::new(MySqlSession {
            conn: Some(conn),
            database: params.database.clone(),
        }))
    }
}

/// One open MySQL introspection session
struct MySqlSession {
    conn: Option<MySqlConnection>,
    database: String,
}

impl MySqlSession {
    fn conn(&mut self) -> DbResult<&mut MySqlConnection> {
        self.conn
            .as_mut()
            .ok_or_else(|| DbError::QueryError("catalog session already closed".to_string()))
    }
}

#[async_trait]
impl CatalogSession for MySqlSession {
    async fn list_tables(&mut self) -> DbResult<Vec<String>> {
        let database = self.database.clone();
        let rows = sqlx::query(LIST_TABLES_SQL)
            .bind(&database)
            .fetch_all(self.conn()?)
            .await
            .map_err(|e| DbError::QueryError(format!("listing tables: {e}")))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("table_name")
                    .map_err(|e| DbError::QueryError(format!("reading table name: {e}")))
            })
            .collect()
    }

    async fn list_columns(&mut self, table: &str) -> DbResult<Vec<ColumnDescriptor>> {
        let database = self.database.clone();
        let rows = sqlx::query(LIST_COLUMNS_SQL)
            .bind(&database)
            .bind(table)
            .fetch_all(self.conn()?)
            .await
            .map_err(|e| DbError::QueryError(format!("listing columns of '{table}': {e}")))?;

        rows.iter()
            .map(|row| {
                let name: String = row
                    .try_get("column_name")
                    .map_err(|e| DbError::QueryError(format!("reading column metadata: {e}")))?;
                let data_type: String = row
                    .try_get("data_type")
                    .map_err(|e| DbError::QueryError(format!("reading column metadata: {e}")))?;
                let is_nullable: String = row
                    .try_get("is_nullable")
                    .map_err(|e| DbError::QueryError(format!("reading column metadata: {e}")))?;
                let default_value: Option<String> = row
                    .try_get("column_default")
                    .map_err(|e| DbError::QueryError(format!("reading column metadata: {e}")))?;

                Ok(ColumnDescriptor {
                    name,
                    data_type,
                    nullable: is_nullable.eq_ignore_ascii_case("YES"),
                    default_value,
                })
            })
            .collect()
    }

    async fn fetch_sample_rows(&mut self, table: &str, limit: usize) -> DbResult<Vec<SampleRow>> {
        let sql = format!("SELECT * FROM {} LIMIT {}", quote_table(table), limit);
        let rows = sqlx::query(&sql)
            .fetch_all(self.conn()?)
            .await
            .map_err(|e| DbError::SampleFetch(format!("sampling '{table}': {e}")))?;

        Ok(rows.iter().map(row_to_sample).collect())
    }

    async fn close(&mut self) -> DbResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close()
                .await
                .map_err(|e| DbError::ConnectionError(format!("closing connection: {e}")))?;
        }
        Ok(())
    }
}

/// Backtick-quote a table identifier for interpolation into a sample
/// query. Catalog-reported names are trusted, this guards names that
/// contain backticks or dots.
fn quote_table(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Convert one row into a JSON column-name -> value mapping.
///
/// Values are decoded best-effort through a chain of common MySQL type
/// mappings; anything undecodable (e.g. DECIMAL without a decimal
/// feature, geometry) degrades to JSON null rather than failing the
/// sample.
fn row_to_sample(row: &MySqlRow) -> SampleRow {
    let mut sample = SampleRow::new();
    for (idx, column) in row.columns().iter().enumerate() {
        sample.insert(column.name().to_string(), decode_value(row, idx));
    }
    sample
}

fn decode_value(row: &MySqlRow, idx: usize) -> serde_json::Value {
    use serde_json::Value;

    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(idx) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<NaiveDateTime>, _>(idx) {
        return v.map(|d| Value::from(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<DateTime<Utc>>, _>(idx) {
        return v.map(|d| Value::from(d.to_rfc3339())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<NaiveDate>, _>(idx) {
        return v.map(|d| Value::from(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<NaiveTime>, _>(idx) {
        return v.map(|d| Value::from(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(idx) {
        return v
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map(Value::from)
            .unwrap_or(Value::Null);
    }

    Value::Null
}
