//! Core domain types for the junk-removal business dashboard.
//!
//! This crate holds everything that does not need a database or a browser:
//! - Job records and the profit/loss calculation
//! - Customer summaries derived from job history
//! - Month and text filters
//! - CSV export, dashboard stats, review requests and marketing posts

mod customer;
mod error;
mod export;
mod filter;
mod form;
mod job;
mod posts;
mod review;
mod stats;

pub use customer::{Customer, CustomerMap, aggregate_customers};
pub use error::{Error, Result};
pub use export::{
    CSV_MIME_TYPE, CUSTOMER_COLUMNS, CsvExport, JOB_COLUMNS, customers_csv, jobs_csv,
};
pub use filter::{CustomerFilter, MonthKey, filter_jobs_by_month};
pub use form::{JobForm, parse_amount};
pub use job::{Job, JobId, MarketingSource, ProfitLoss};
pub use posts::{GeneratedPosts, Platform, Post, PostRequest, ServiceType, ShareTarget};
pub use review::{DeliveryMethod, PreparedReview, ReviewPlatform, ReviewRequest};
pub use stats::{DashboardStats, format_currency};

#[cfg(test)]
pub(crate) mod testing {
    #![allow(clippy::disallowed_methods)]

    use chrono::{NaiveDate, Utc};

    use crate::{Job, JobId, MarketingSource};

    /// A job with zero expenses, identified only by phone, gross and date.
    pub fn job(phone: &str, gross: Option<f64>, date: &str) -> Job {
        let now = Utc::now();
        let mut job = Job {
            id: JobId::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            customer_name: format!("Customer {phone}"),
            phone: phone.to_string(),
            email: None,
            address: "1 Main St".to_string(),
            marketing_source: MarketingSource::Google,
            gross,
            dump_fee: 0.0,
            labor: 0.0,
            gas: 0.0,
            uhaul: 0.0,
            other_expenses: 0.0,
            total_expenses: 0.0,
            profit: 0.0,
            margin: 0.0,
            created_at: now,
            updated_at: now,
        };
        job.recompute();
        job
    }
}
