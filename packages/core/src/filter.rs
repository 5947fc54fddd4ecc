//! Month and free-text filters over jobs and derived customers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Customer, Error, Job};

/// A calendar month, written `YYYY-MM` with a 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// A month filter as typed into a month picker.
///
/// Empty input is inactive and passes everything. Input that is not a valid
/// month passes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthPredicate {
    Inactive,
    Month(MonthKey),
    Unmatchable,
}

impl MonthPredicate {
    fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Inactive;
        }
        match raw.parse() {
            Ok(key) => Self::Month(key),
            Err(_) => Self::Unmatchable,
        }
    }

    fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Inactive => true,
            Self::Month(key) => key.contains(date),
            Self::Unmatchable => false,
        }
    }
}

/// Jobs whose own date falls in `month`. An empty `month` keeps every job.
pub fn filter_jobs_by_month(jobs: &[Job], month: &str) -> Vec<Job> {
    let predicate = MonthPredicate::parse(month);
    jobs.iter()
        .filter(|job| predicate.matches(job.date))
        .cloned()
        .collect()
}

/// Customer table filters. Both default to inactive and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// `YYYY-MM` matched against each customer's last job date.
    #[serde(default)]
    pub month: String,
    /// Case-insensitive substring of name, phone or email.
    #[serde(default)]
    pub search: String,
}

impl CustomerFilter {
    pub fn is_active(&self) -> bool {
        !self.month.is_empty() || !self.search.is_empty()
    }

    pub fn apply<'a, I>(&self, customers: I) -> Vec<Customer>
    where
        I: IntoIterator<Item = &'a Customer>,
    {
        let month = MonthPredicate::parse(&self.month);
        let query = self.search.to_lowercase();

        customers
            .into_iter()
            .filter(|c| matches_search(c, &query) && month.matches(c.last_job_date))
            .cloned()
            .collect()
    }
}

fn matches_search(customer: &Customer, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [&customer.name, &customer.phone, &customer.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::aggregate_customers;
    use crate::testing::job;

    #[test]
    fn month_key_parses_and_formats() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert_eq!(key, MonthKey { year: 2024, month: 3 });
        assert_eq!(key.to_string(), "2024-03");
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("march".parse::<MonthKey>().is_err());
    }

    #[test]
    fn month_boundary_jobs_never_share_a_month() {
        let jobs = vec![
            job("1", Some(1.0), "2024-01-31"),
            job("2", Some(1.0), "2024-02-01"),
        ];
        let jan = filter_jobs_by_month(&jobs, "2024-01");
        let feb = filter_jobs_by_month(&jobs, "2024-02");
        assert_eq!(jan.len(), 1);
        assert_eq!(jan[0].phone, "1");
        assert_eq!(feb.len(), 1);
        assert_eq!(feb[0].phone, "2");
    }

    #[test]
    fn year_must_match_too() {
        let jobs = vec![job("1", Some(1.0), "2023-01-15")];
        assert!(filter_jobs_by_month(&jobs, "2024-01").is_empty());
    }

    #[test]
    fn empty_month_keeps_everything_and_garbage_keeps_nothing() {
        let jobs = vec![job("1", Some(1.0), "2024-01-15")];
        assert_eq!(filter_jobs_by_month(&jobs, "").len(), 1);
        assert!(filter_jobs_by_month(&jobs, "not-a-month").is_empty());
    }

    #[test]
    fn customer_month_uses_last_job_date() {
        let jobs = vec![
            job("555", Some(1.0), "2024-01-05"),
            job("555", Some(1.0), "2024-02-10"),
            job("777", Some(1.0), "2024-01-20"),
        ];
        let customers = aggregate_customers(&jobs);
        let filter = CustomerFilter {
            month: "2024-01".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&customers);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phone, "777");
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let mut a = job("(512) 555-0101", Some(1.0), "2024-01-05");
        a.customer_name = "Alice Brown".to_string();
        let mut b = job("(512) 777-0202", Some(1.0), "2024-01-06");
        b.customer_name = "Bob Green".to_string();
        b.email = Some("Bob@Example.com".to_string());
        let mut c = job("(512) 888-0303", Some(1.0), "2024-01-07");
        c.customer_name = "Carol White".to_string();
        let customers = aggregate_customers(&[a, b, c]);

        let by = |q: &str| {
            CustomerFilter {
                search: q.to_string(),
                ..Default::default()
            }
            .apply(&customers)
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
        };

        assert_eq!(by("555"), ["Alice Brown"]);
        assert_eq!(by("ALICE"), ["Alice Brown"]);
        assert_eq!(by("example.COM"), ["Bob Green"]);
        assert_eq!(by("(512)").len(), 3);
        assert!(by("zzz").is_empty());
    }

    #[test]
    fn filters_combine_and_leave_input_untouched() {
        let jobs = vec![
            job("555", Some(1.0), "2024-01-05"),
            job("556", Some(1.0), "2024-02-05"),
        ];
        let customers = aggregate_customers(&jobs);
        let before = customers.clone();

        let filter = CustomerFilter {
            month: "2024-02".to_string(),
            search: "55".to_string(),
        };
        assert!(filter.is_active());
        let hits = filter.apply(&customers);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phone, "556");
        assert_eq!(customers, before);

        assert_eq!(CustomerFilter::default().apply(&customers).len(), 2);
    }
}
