#![allow(clippy::disallowed_methods, dead_code)]

use chrono::{NaiveDate, Utc};
use hauldesk_core::{Job, JobForm, JobId};

use db::{DbConfig, DbError, JobRepository};

/// Each call opens its own in-memory datastore, so tests never share rows.
pub async fn setup_repo() -> Result<JobRepository, DbError> {
    let database = format!("test_{}", JobId::new());
    let conn = db::init(DbConfig::memory().with_database(database)).await?;
    Ok(JobRepository::new(conn))
}

pub fn form(phone: &str, gross: &str, date: &str) -> JobForm {
    let mut form = JobForm::blank(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    form.date = date.to_string();
    form.customer_name = format!("Customer {phone}");
    form.phone = phone.to_string();
    form.address = "1 Main St".to_string();
    form.marketing_source = "Referral".to_string();
    form.gross = gross.to_string();
    form
}

pub fn job(phone: &str, gross: &str, date: &str) -> Job {
    form(phone, gross, date)
        .into_job(JobId::new(), Utc::now())
        .unwrap()
}
