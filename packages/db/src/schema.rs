//! Database schema definitions using SurrealQL.

use crate::{Database, DbError};

/// Initialize the database schema.
///
/// This creates all necessary tables, fields, and indexes.
pub async fn init_schema(db: &Database) -> Result<(), DbError> {
    tracing::info!("Initializing database schema...");

    db.query(JOB_SCHEMA).await?.check()?;

    tracing::info!("Database schema initialized");

    Ok(())
}

/// Job table schema.
///
/// Dates are stored as ISO strings so lexical order is chronological order.
const JOB_SCHEMA: &str = r#"
-- Job table for completed services
DEFINE TABLE IF NOT EXISTS job SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS job_id ON job TYPE string;
DEFINE FIELD IF NOT EXISTS date ON job TYPE string;
DEFINE FIELD IF NOT EXISTS customer_name ON job TYPE string;
DEFINE FIELD IF NOT EXISTS phone ON job TYPE string;
DEFINE FIELD IF NOT EXISTS email ON job TYPE option<string>;
DEFINE FIELD IF NOT EXISTS address ON job TYPE string;
DEFINE FIELD IF NOT EXISTS marketing_source ON job TYPE string;
DEFINE FIELD IF NOT EXISTS gross ON job TYPE option<number>;
DEFINE FIELD IF NOT EXISTS dump_fee ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS labor ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS gas ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS uhaul ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS other_expenses ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS total_expenses ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS profit ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS margin ON job TYPE number DEFAULT 0;
DEFINE FIELD IF NOT EXISTS created_at ON job TYPE string;
DEFINE FIELD IF NOT EXISTS updated_at ON job TYPE string;

-- Indexes for the dashboard queries
DEFINE INDEX IF NOT EXISTS job_date ON job FIELDS date;
DEFINE INDEX IF NOT EXISTS job_phone ON job FIELDS phone;
"#;
