//! SurrealDB integration for the business dashboard.
//!
//! This crate provides database connectivity and the job repository that
//! owns every persisted job record.
//!
//! # Features
//!
//! - `memory` (default): Use in-memory storage for testing
//! - `rocksdb`: Use RocksDB for persistent file-based storage

mod connection;
mod schema;
pub mod repositories;

pub use connection::{Database, DbConfig, DbError, connect_db};
pub use repositories::{JobRepository, JobSort};
pub use schema::init_schema;

/// Connect with the given configuration and make sure the schema exists.
///
/// This should be called once at application startup; the returned handle
/// is passed to the repositories.
pub async fn init(config: DbConfig) -> Result<Database, DbError> {
    let db = connect_db(&config).await?;
    init_schema(&db).await?;
    Ok(db)
}
