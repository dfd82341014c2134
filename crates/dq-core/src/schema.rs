//! Schema snapshot types
//!
//! A `SchemaSnapshot` is a point-in-time picture of one database: every
//! table visible to the supplied credentials, with ordered column
//! metadata and a small best-effort sample of rows. Snapshots are built
//! fresh on every read and never cached or shared across requests.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum number of sample rows fetched per table.
pub const SAMPLE_ROW_LIMIT: usize = 5;

/// One sampled row, keyed by column name.
pub type SampleRow = serde_json::Map<String, serde_json::Value>;

/// Connection parameters for one schema read.
///
/// Supplied per call and discarded once the read completes; never
/// persisted. `port` defaults to the backend's standard port when unset.
#[derive(Clone)]
pub struct ConnectionParams {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Column metadata as declared in the database catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Declared data type (e.g. `varchar`, `int`)
    pub data_type: String,

    /// Whether the column accepts NULL
    pub nullable: bool,

    /// Declared default value, if any
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Snapshot of a single table: ordered columns plus sampled rows.
///
/// `sample_rows` is best-effort - when sampling fails the table is kept
/// with an empty sample rather than dropped from the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// Table name as reported by the catalog
    pub table_name: String,

    /// Columns in declared (ordinal) order
    pub columns: Vec<ColumnDescriptor>,

    /// Up to [`SAMPLE_ROW_LIMIT`] sampled rows
    pub sample_rows: Vec<SampleRow>,
}

/// Snapshot of a whole database schema.
///
/// Iteration order is the order the catalog returned the tables, and is
/// the order downstream suite generation processes them in. Serializes
/// as a JSON map of table name to `{columns, sample_rows}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaSnapshot {
    tables: Vec<TableSnapshot>,
}

impl SchemaSnapshot {
    /// Create a snapshot from tables in catalog order
    pub fn new(tables: Vec<TableSnapshot>) -> Self {
        Self { tables }
    }

    /// Tables in catalog order
    pub fn tables(&self) -> &[TableSnapshot] {
        &self.tables
    }

    /// Look up one table by name
    pub fn get(&self, table_name: &str) -> Option<&TableSnapshot> {
        self.tables.iter().find(|t| t.table_name == table_name)
    }

    /// Number of tables in the snapshot
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when the database exposed no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names in catalog order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.table_name.as_str())
    }
}

/// Serialized body of a table entry; the table name is the map key.
#[derive(Serialize)]
struct TableBodyRef<'a> {
    columns: &'a [ColumnDescriptor],
    sample_rows: &'a [SampleRow],
}

#[derive(Deserialize)]
struct TableBody {
    columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    sample_rows: Vec<SampleRow>,
}

impl Serialize for SchemaSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            let body = TableBodyRef {
                columns: &table.columns,
                sample_rows: &table.sample_rows,
            };
            map.serialize_entry(&table.table_name, &body)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = SchemaSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of table name to table snapshot")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tables = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((table_name, body)) = access.next_entry::<String, TableBody>()? {
                    tables.push(TableSnapshot {
                        table_name,
                        columns: body.columns,
                        sample_rows: body.sample_rows,
                    });
                }
                Ok(SchemaSnapshot { tables })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
