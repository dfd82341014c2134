//! dq-db - Database introspection layer for DataQuill
//!
//! This crate provides the `CatalogConnector`/`CatalogSession` traits,
//! the MySQL implementation, and the `SchemaReader` that turns a live
//! connection into a [`dq_core::SchemaSnapshot`].

pub mod catalog;
pub mod error;
pub mod mysql;
pub mod reader;

pub use catalog::{CatalogConnector, CatalogSession};
pub use error::{DbError, DbResult};
pub use mysql::MySqlCatalog;
pub use reader::SchemaReader;
