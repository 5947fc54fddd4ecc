//! Job management server functions.

use dioxus::prelude::*;
use hauldesk_core::{Job, JobForm};

#[cfg(feature = "server")]
fn store_error(action: &str, e: impl std::fmt::Display) -> ServerFnError {
    tracing::warn!("Failed to {}: {}", action, e);
    ServerFnError::new(format!("Failed to {}: {}", action, e))
}

#[cfg(feature = "server")]
fn parse_job_id(id: &str) -> Result<hauldesk_core::JobId, ServerFnError> {
    hauldesk_core::JobId::parse(id)
        .map_err(|e| ServerFnError::new(format!("Invalid job ID: {}", e)))
}

/// List every job, newest service date first.
#[get("/api/jobs")]
pub async fn list_jobs() -> Result<Vec<Job>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let repo = crate::init_store()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        repo.list(db::JobSort::DateDesc)
            .await
            .map_err(|e| store_error("load jobs", e))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Save a new job from the submitted form.
#[post("/api/jobs/create")]
pub async fn create_job(form: JobForm) -> Result<Job, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use hauldesk_core::JobId;

        let job = form
            .into_job(JobId::new(), chrono::Utc::now())
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let repo = crate::init_store()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let created = repo
            .create(&job)
            .await
            .map_err(|e| store_error("save job", e))?;
        tracing::info!(job_id = %created.id, "Job saved");
        Ok(created)
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = form;
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Replace an existing job with the submitted form.
#[post("/api/jobs/update")]
pub async fn update_job(id: String, form: JobForm) -> Result<Job, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let job_id = parse_job_id(&id)?;

        let repo = crate::init_store()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        // Creation time is carried over by the repository.
        let job = form
            .into_job(job_id, chrono::Utc::now())
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let updated = repo
            .update(&job)
            .await
            .map_err(|e| store_error("update job", e))?;
        tracing::info!(job_id = %updated.id, "Job updated");
        Ok(updated)
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (id, form);
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Delete a job by ID.
#[post("/api/jobs/delete")]
pub async fn delete_job(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        let job_id = parse_job_id(&id)?;

        let repo = crate::init_store()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        repo.delete(job_id)
            .await
            .map_err(|e| store_error("delete job", e))?;
        tracing::info!(job_id = %job_id, "Job deleted");
        Ok(())
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Err(ServerFnError::new("Server-only function"))
    }
}
