//! Job repository for CRUD operations.

use chrono::{DateTime, NaiveDate, Utc};
use hauldesk_core::{Job, JobId, MarketingSource};
use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

const TABLE: &str = "job";

/// Sort order for listing jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobSort {
    /// Newest service date first (`-date`).
    #[default]
    DateDesc,
    /// Oldest service date first (`date`).
    DateAsc,
}

impl JobSort {
    /// Parse a sort key such as `-date` or `date`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "-date" => Some(JobSort::DateDesc),
            "date" => Some(JobSort::DateAsc),
            _ => None,
        }
    }

    fn order_clause(&self) -> &'static str {
        match self {
            JobSort::DateDesc => "ORDER BY date DESC, created_at DESC",
            JobSort::DateAsc => "ORDER BY date ASC, created_at ASC",
        }
    }
}

/// Internal record type for SurrealDB.
///
/// The record key is the job ULID; it is repeated in `job_id` so rows read
/// back through `SELECT` carry it as a plain string.
#[derive(Debug, Serialize, Deserialize)]
struct JobRecord {
    job_id: String,
    date: String,
    customer_name: String,
    phone: String,
    email: Option<String>,
    address: String,
    marketing_source: String,
    gross: Option<f64>,
    #[serde(default)]
    dump_fee: f64,
    #[serde(default)]
    labor: f64,
    #[serde(default)]
    gas: f64,
    #[serde(default)]
    uhaul: f64,
    #[serde(default)]
    other_expenses: f64,
    #[serde(default)]
    total_expenses: f64,
    #[serde(default)]
    profit: f64,
    #[serde(default)]
    margin: f64,
    created_at: String,
    updated_at: String,
}

impl From<&Job> for JobRecord {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id.to_string(),
            date: job.date.format("%Y-%m-%d").to_string(),
            customer_name: job.customer_name.clone(),
            phone: job.phone.clone(),
            email: job.email.clone(),
            address: job.address.clone(),
            marketing_source: job.marketing_source.to_string(),
            gross: job.gross,
            dump_fee: job.dump_fee,
            labor: job.labor,
            gas: job.gas,
            uhaul: job.uhaul,
            other_expenses: job.other_expenses,
            total_expenses: job.total_expenses,
            profit: job.profit,
            margin: job.margin,
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
        }
    }
}

impl TryFrom<JobRecord> for Job {
    type Error = DbError;

    fn try_from(record: JobRecord) -> Result<Self, Self::Error> {
        let bad = |field: &str, value: &str| {
            DbError::Serialization(format!("Invalid {field} on job {}: {value}", record.job_id))
        };

        let id = JobId::parse(&record.job_id).map_err(|_| bad("id", &record.job_id))?;
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|_| bad("date", &record.date))?;
        let marketing_source: MarketingSource = record
            .marketing_source
            .parse()
            .map_err(|_| bad("marketing_source", &record.marketing_source))?;
        let created_at = parse_timestamp(&record.created_at).ok_or_else(|| bad("created_at", &record.created_at))?;
        let updated_at = parse_timestamp(&record.updated_at).ok_or_else(|| bad("updated_at", &record.updated_at))?;

        Ok(Job {
            id,
            date,
            customer_name: record.customer_name,
            phone: record.phone,
            email: record.email.filter(|e| !e.is_empty()),
            address: record.address,
            marketing_source,
            gross: record.gross,
            dump_fee: record.dump_fee,
            labor: record.labor,
            gas: record.gas,
            uhaul: record.uhaul,
            other_expenses: record.other_expenses,
            total_expenses: record.total_expenses,
            profit: record.profit,
            margin: record.margin,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Repository for job persistence operations.
///
/// Constructed once with a connection and handed to whoever needs jobs.
#[derive(Debug, Clone)]
pub struct JobRepository {
    db: Database,
}

impl JobRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new job. Profit/loss is recomputed before writing.
    pub async fn create(&self, job: &Job) -> Result<Job, DbError> {
        let mut job = job.clone();
        job.recompute();
        tracing::debug!(job_id = %job.id, "Creating job");

        let record: Option<JobRecord> = self
            .db
            .create((TABLE, job.id.to_string()))
            .content(JobRecord::from(&job))
            .await?;

        record
            .ok_or_else(|| DbError::Query("Failed to create job".into()))?
            .try_into()
    }

    /// Get a job by ID.
    pub async fn get(&self, id: JobId) -> Result<Job, DbError> {
        let record: Option<JobRecord> = self.db.select((TABLE, id.to_string())).await?;

        record
            .ok_or_else(|| DbError::NotFound(format!("Job not found: {}", id)))?
            .try_into()
    }

    /// List every job in the given order.
    pub async fn list(&self, sort: JobSort) -> Result<Vec<Job>, DbError> {
        let query = format!("SELECT * FROM {TABLE} {}", sort.order_clause());

        let mut response = self.db.query(query).await?;
        let records: Vec<JobRecord> = response.take(0)?;
        tracing::debug!(count = records.len(), "Listed jobs");

        records.into_iter().map(Job::try_from).collect()
    }

    /// Replace a stored job with `job`. Profit/loss is recomputed and the
    /// original creation time is kept.
    pub async fn update(&self, job: &Job) -> Result<Job, DbError> {
        let existing = self.get(job.id).await?;

        let mut updated = job.clone();
        updated.created_at = existing.created_at;
        updated.updated_at = Utc::now();
        updated.recompute();
        tracing::debug!(job_id = %job.id, "Updating job");

        let record: Option<JobRecord> = self
            .db
            .update((TABLE, job.id.to_string()))
            .content(JobRecord::from(&updated))
            .await?;

        record
            .ok_or_else(|| DbError::NotFound(format!("Job not found: {}", job.id)))?
            .try_into()
    }

    /// Delete a job.
    pub async fn delete(&self, id: JobId) -> Result<(), DbError> {
        tracing::debug!(job_id = %id, "Deleting job");

        let deleted: Option<JobRecord> = self.db.delete((TABLE, id.to_string())).await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound(format!("Job not found: {}", id))),
        }
    }
}
