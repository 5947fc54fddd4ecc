//! Headline figures for the current month.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Job, MonthKey};

/// Totals over the jobs dated in one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub job_count: usize,
    /// Distinct phone numbers among the month's jobs.
    pub customer_count: usize,
    pub total_gross: f64,
    pub total_profit: f64,
}

impl DashboardStats {
    /// Stats for the month containing `today`.
    pub fn for_month_of(jobs: &[Job], today: NaiveDate) -> Self {
        let month = MonthKey::of(today);
        let month_jobs: Vec<&Job> = jobs.iter().filter(|j| month.contains(j.date)).collect();

        Self {
            job_count: month_jobs.len(),
            customer_count: month_jobs
                .iter()
                .map(|j| j.phone.as_str())
                .collect::<HashSet<_>>()
                .len(),
            total_gross: month_jobs.iter().map(|j| j.gross_or_zero()).sum(),
            total_profit: month_jobs.iter().map(|j| j.profit).sum(),
        }
    }

    pub fn is_loss(&self) -> bool {
        self.total_profit < 0.0
    }
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::testing::job;

    #[test]
    fn counts_only_the_current_month() {
        let mut loss = job("555", Some(100.0), "2024-05-03");
        loss.labor = 150.0;
        loss.recompute();
        let jobs = vec![
            job("555", Some(200.0), "2024-05-01"),
            loss,
            job("777", None, "2024-05-31"),
            job("888", Some(999.0), "2024-04-30"),
            job("999", Some(999.0), "2023-05-15"),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let stats = DashboardStats::for_month_of(&jobs, today);
        assert_eq!(stats.job_count, 3);
        assert_eq!(stats.customer_count, 2);
        assert_eq!(stats.total_gross, 300.0);
        assert_eq!(stats.total_profit, 150.0);
        assert!(!stats.is_loss());
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-980.0), "-$980.00");
    }
}
