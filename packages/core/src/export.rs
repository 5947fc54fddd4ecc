//! Spreadsheet (CSV) export of jobs and customers.
//!
//! Fields are joined with bare commas and no quoting, so a value containing a
//! comma shifts the columns after it. Spreadsheets opened from these files
//! rely on that exact layout.

use serde::{Deserialize, Serialize};

use crate::{Job, aggregate_customers, filter_jobs_by_month};

pub const CSV_MIME_TYPE: &str = "text/csv";

pub const JOB_COLUMNS: [&str; 15] = [
    "Date",
    "Customer",
    "Phone",
    "Email",
    "Address",
    "Marketing Source",
    "Gross",
    "Dump Fee",
    "Labor",
    "Gas",
    "U-Haul",
    "Other Expenses",
    "Total Expenses",
    "Profit/Loss",
    "Margin %",
];

pub const CUSTOMER_COLUMNS: [&str; 7] = [
    "Name",
    "Phone",
    "Email",
    "Address",
    "Total Jobs",
    "Total Spent",
    "Last Job Date",
];

/// A rendered file ready to hand to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

impl CsvExport {
    /// Export the jobs table, narrowed to `month` when one is selected.
    pub fn jobs(jobs: &[Job], month: &str) -> Self {
        let (selected, filename) = if month.is_empty() {
            (jobs.to_vec(), "all_jobs.csv".to_string())
        } else {
            (
                filter_jobs_by_month(jobs, month),
                format!("jobs_{month}.csv"),
            )
        };

        Self {
            filename,
            mime_type: CSV_MIME_TYPE.to_string(),
            content: jobs_csv(&selected),
        }
    }

    /// Export every customer derived from `jobs`.
    pub fn customers(jobs: &[Job]) -> Self {
        Self {
            filename: "customers.csv".to_string(),
            mime_type: CSV_MIME_TYPE.to_string(),
            content: customers_csv(jobs),
        }
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn render(header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    std::iter::once(header.join(","))
        .chain(rows.map(|row| row.join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row per job with every raw and derived field.
pub fn jobs_csv(jobs: &[Job]) -> String {
    let rows = jobs.iter().map(|job| {
        vec![
            job.date.format("%Y-%m-%d").to_string(),
            job.customer_name.clone(),
            job.phone.clone(),
            job.email.clone().unwrap_or_default(),
            job.address.clone(),
            job.marketing_source.to_string(),
            job.gross.map(money).unwrap_or_default(),
            money(job.dump_fee),
            money(job.labor),
            money(job.gas),
            money(job.uhaul),
            money(job.other_expenses),
            money(job.total_expenses),
            money(job.profit),
            money(job.margin),
        ]
    });
    render(&JOB_COLUMNS, rows)
}

/// One row per customer. The aggregation is rebuilt from `jobs` so the file
/// matches what the customer table shows for the same job list.
pub fn customers_csv(jobs: &[Job]) -> String {
    let customers = aggregate_customers(jobs);
    let rows = customers.iter().map(|c| {
        vec![
            c.name.clone(),
            c.phone.clone(),
            c.email.clone(),
            c.address.clone(),
            c.job_count().to_string(),
            money(c.total_spent),
            c.last_job_date.format("%Y-%m-%d").to_string(),
        ]
    });
    render(&CUSTOMER_COLUMNS, rows)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::testing::job;

    fn priced_job() -> Job {
        let mut j = job("555-0101", Some(450.0), "2024-03-09");
        j.customer_name = "Sam Reed".to_string();
        j.address = "9 Pine Ct".to_string();
        j.dump_fee = 80.0;
        j.labor = 60.0;
        j.gas = 20.0;
        j.recompute();
        j
    }

    #[test]
    fn job_rows_have_fifteen_two_decimal_fields() {
        let csv = jobs_csv(&[priced_job()]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), 15);
        assert_eq!(
            lines[1],
            "2024-03-09,Sam Reed,555-0101,,9 Pine Ct,Google,450.00,80.00,60.00,20.00,0.00,0.00,160.00,290.00,64.44"
        );
    }

    #[test]
    fn missing_gross_exports_as_empty_field() {
        let csv = jobs_csv(&[job("1", None, "2024-03-09")]);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<_> = row.split(',').collect();
        assert_eq!(fields[6], "");
    }

    #[test]
    fn commas_are_not_escaped() {
        let mut j = priced_job();
        j.address = "9 Pine Ct, Austin".to_string();
        let csv = jobs_csv(&[j]);
        assert_eq!(csv.lines().nth(1).unwrap().split(',').count(), 16);
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(jobs_csv(&[]), JOB_COLUMNS.join(","));
        assert_eq!(customers_csv(&[]), CUSTOMER_COLUMNS.join(","));
    }

    #[test]
    fn customer_rows_follow_aggregation() {
        let jobs = vec![
            job("555", Some(100.0), "2024-01-05"),
            job("555", Some(50.0), "2024-02-10"),
            job("777", Some(30.0), "2024-01-20"),
        ];
        let csv = customers_csv(&jobs);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Customer 555,555,"));
        assert!(lines[1].ends_with(",2,150.00,2024-02-10"));
        assert!(lines[2].ends_with(",1,30.00,2024-01-20"));
    }

    #[test]
    fn export_filenames() {
        let jobs = vec![
            job("1", Some(1.0), "2024-01-31"),
            job("2", Some(1.0), "2024-02-01"),
        ];

        let all = CsvExport::jobs(&jobs, "");
        assert_eq!(all.filename, "all_jobs.csv");
        assert_eq!(all.mime_type, "text/csv");
        assert_eq!(all.content.lines().count(), 3);

        let feb = CsvExport::jobs(&jobs, "2024-02");
        assert_eq!(feb.filename, "jobs_2024-02.csv");
        assert_eq!(feb.content.lines().count(), 2);

        assert_eq!(CsvExport::customers(&jobs).filename, "customers.csv");
    }
}
