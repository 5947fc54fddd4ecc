//! Database connection and configuration.

use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use thiserror::Error;

/// Database connection handle. Cheap to clone; clones share one connection.
pub type Database = Surreal<Any>;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection endpoint: "mem://", "file://path" or "rocksdb://path"
    pub endpoint: String,
    /// Namespace to use
    pub namespace: String,
    /// Database name to use
    pub database: String,
    /// Optional root credentials for authentication
    pub credentials: Option<(String, String)>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            endpoint: "mem://".to_string(),
            namespace: "hauldesk".to_string(),
            database: "main".to_string(),
            credentials: None,
        }
    }
}

impl DbConfig {
    /// Create a config for in-memory testing.
    pub fn memory() -> Self {
        Self::default()
    }

    /// Create a config for file-based persistence.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            endpoint: format!("file://{}", path.into()),
            ..Default::default()
        }
    }

    /// Create a config for RocksDB persistence (requires rocksdb feature).
    pub fn rocksdb(path: impl Into<String>) -> Self {
        Self {
            endpoint: format!("rocksdb://{}", path.into()),
            ..Default::default()
        }
    }

    /// Build a config from `HAULDESK_DB_*` environment variables.
    ///
    /// Deployments that set `RAILWAY_ENVIRONMENT` default to file storage
    /// under `./data/surrealdb`; everything else defaults to memory.
    pub fn from_env() -> Self {
        let mut config = match env_var("HAULDESK_DB_ENDPOINT") {
            Some(endpoint) => Self {
                endpoint,
                ..Default::default()
            },
            None if std::env::var("RAILWAY_ENVIRONMENT").is_ok() => {
                Self::file("./data/surrealdb")
            }
            None => Self::memory(),
        };

        if let Some(namespace) = env_var("HAULDESK_DB_NAMESPACE") {
            config = config.with_namespace(namespace);
        }
        if let Some(database) = env_var("HAULDESK_DB_DATABASE") {
            config = config.with_database(database);
        }
        if let (Some(user), Some(pass)) = (env_var("HAULDESK_DB_USER"), env_var("HAULDESK_DB_PASS")) {
            config = config.with_credentials(user, pass);
        }

        config
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set root credentials for authentication.
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection error: {0}")]
    Connection(#[from] surrealdb::Error),
    #[error("Query error: {0}")]
    Query(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Open a connection and select the configured namespace and database.
pub async fn connect_db(config: &DbConfig) -> Result<Database, DbError> {
    tracing::info!("Connecting to database: {}", config.endpoint);

    let db = connect(&config.endpoint).await?;

    // Authenticate if credentials provided
    if let Some((username, password)) = &config.credentials {
        db.signin(Root { username, password }).await?;
    }

    db.use_ns(&config.namespace).use_db(&config.database).await?;

    tracing::info!(
        "Connected to database: {}/{}",
        config.namespace,
        config.database
    );

    Ok(db)
}
