//! Error types for dq-db

use thiserror::Error;

/// Database introspection errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001) - the database could not be reached or
    /// refused the credentials; fatal to the whole schema read
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Catalog query error (D002) - listing tables or columns failed;
    /// fatal to the whole schema read
    #[error("[D002] Catalog query failed: {0}")]
    QueryError(String),

    /// Sample fetch error (D003) - sampling rows for one table failed;
    /// recovered locally by degrading to an empty sample
    #[error("[D003] Sample row fetch failed: {0}")]
    SampleFetch(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
