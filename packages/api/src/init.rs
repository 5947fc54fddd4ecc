//! Server-side store initialization.

use db::{DbConfig, DbError, JobRepository};
use tokio::sync::OnceCell;

/// The job store, opened on first use and shared by every server function.
static REPOSITORY: OnceCell<JobRepository> = OnceCell::const_new();

/// Open the database described by the environment and build the repository.
///
/// Safe to call more than once; only the first call connects.
pub async fn init_store() -> Result<&'static JobRepository, DbError> {
    REPOSITORY
        .get_or_try_init(|| async {
            tracing::info!("Initializing job store...");
            let conn = db::init(DbConfig::from_env()).await?;
            tracing::info!("Job store initialized");
            Ok(JobRepository::new(conn))
        })
        .await
}
