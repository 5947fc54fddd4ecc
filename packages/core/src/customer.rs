//! Customer view derived from job history.
//!
//! Customers are never stored. They are folded from the job list every time
//! they are needed, keyed by phone number.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Job;

/// All jobs that share one phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    /// Empty when the first job seen for this phone had no email.
    pub email: String,
    pub address: String,
    /// Jobs in the order they were aggregated.
    pub jobs: Vec<Job>,
    pub total_spent: f64,
    pub last_job_date: NaiveDate,
}

impl Customer {
    /// Seed a customer from the first job seen for its phone number.
    /// Contact details stay as this job recorded them.
    fn seed(job: &Job) -> Self {
        Self {
            name: job.customer_name.clone(),
            phone: job.phone.clone(),
            email: job.email.clone().unwrap_or_default(),
            address: job.address.clone(),
            jobs: Vec::new(),
            total_spent: 0.0,
            last_job_date: job.date,
        }
    }

    fn record(&mut self, job: &Job) {
        self.jobs.push(job.clone());
        self.total_spent += job.gross_or_zero();
        if job.date > self.last_job_date {
            self.last_job_date = job.date;
        }
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

/// Customers keyed by phone, in order of each phone's first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerMap {
    customers: Vec<Customer>,
    index: HashMap<String, usize>,
}

impl CustomerMap {
    pub fn get(&self, phone: &str) -> Option<&Customer> {
        self.index.get(phone).map(|&i| &self.customers[i])
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Customer> {
        self.customers.iter()
    }

    pub fn as_slice(&self) -> &[Customer] {
        &self.customers
    }

    pub fn into_vec(self) -> Vec<Customer> {
        self.customers
    }
}

impl<'a> IntoIterator for &'a CustomerMap {
    type Item = &'a Customer;
    type IntoIter = std::slice::Iter<'a, Customer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fold a job list into one customer per distinct phone number.
///
/// Jobs are visited in input order. The output is not sorted.
pub fn aggregate_customers(jobs: &[Job]) -> CustomerMap {
    let mut map = CustomerMap::default();

    for job in jobs {
        let slot = match map.index.get(&job.phone) {
            Some(&i) => i,
            None => {
                map.customers.push(Customer::seed(job));
                let i = map.customers.len() - 1;
                map.index.insert(job.phone.clone(), i);
                i
            }
        };
        map.customers[slot].record(job);
    }

    map
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use std::collections::HashSet;

    use super::*;
    use crate::testing::job;

    fn sample() -> Vec<Job> {
        vec![
            job("555", Some(100.0), "2024-01-05"),
            job("555", Some(50.0), "2024-02-10"),
            job("777", Some(30.0), "2024-01-20"),
        ]
    }

    #[test]
    fn groups_jobs_by_phone() {
        let customers = aggregate_customers(&sample());
        assert_eq!(customers.len(), 2);

        let a = customers.get("555").unwrap();
        assert_eq!(a.total_spent, 150.0);
        assert_eq!(a.job_count(), 2);
        assert_eq!(a.last_job_date.to_string(), "2024-02-10");

        let b = customers.get("777").unwrap();
        assert_eq!(b.total_spent, 30.0);
        assert_eq!(b.job_count(), 1);
    }

    #[test]
    fn keeps_first_appearance_order() {
        let jobs = vec![
            job("777", Some(1.0), "2024-03-01"),
            job("555", Some(1.0), "2024-01-01"),
            job("777", Some(1.0), "2024-01-01"),
        ];
        let phones: Vec<_> = aggregate_customers(&jobs)
            .iter()
            .map(|c| c.phone.clone())
            .collect();
        assert_eq!(phones, ["777", "555"]);
    }

    #[test]
    fn missing_gross_counts_as_zero() {
        let jobs = vec![
            job("555", None, "2024-01-05"),
            job("555", Some(75.5), "2024-01-06"),
        ];
        let customers = aggregate_customers(&jobs);
        assert_eq!(customers.get("555").unwrap().total_spent, 75.5);
    }

    #[test]
    fn last_job_date_is_the_maximum_not_the_latest_seen() {
        // Jobs usually arrive newest first.
        let jobs = vec![
            job("555", Some(1.0), "2024-06-01"),
            job("555", Some(1.0), "2024-02-01"),
        ];
        let customers = aggregate_customers(&jobs);
        assert_eq!(
            customers.get("555").unwrap().last_job_date.to_string(),
            "2024-06-01"
        );
    }

    #[test]
    fn contact_details_come_from_first_job() {
        let mut first = job("555", Some(1.0), "2024-01-01");
        first.email = None;
        first.address = "Old Address".to_string();
        let mut second = job("555", Some(1.0), "2024-05-01");
        second.email = Some("new@example.com".to_string());
        second.address = "New Address".to_string();

        let customers = aggregate_customers(&[first, second]);
        let c = customers.get("555").unwrap();
        assert_eq!(c.email, "");
        assert!(!c.has_email());
        assert_eq!(c.address, "Old Address");
    }

    #[test]
    fn totals_match_per_phone_sums() {
        let jobs = vec![
            job("1", Some(10.0), "2024-01-01"),
            job("2", None, "2024-01-02"),
            job("1", Some(20.0), "2024-01-03"),
            job("3", Some(5.0), "2024-01-04"),
            job("2", Some(7.0), "2024-01-05"),
            job("1", None, "2024-01-06"),
        ];
        let customers = aggregate_customers(&jobs);

        let phones: HashSet<_> = jobs.iter().map(|j| j.phone.as_str()).collect();
        assert_eq!(customers.len(), phones.len());

        for c in &customers {
            let mine: Vec<_> = jobs.iter().filter(|j| j.phone == c.phone).collect();
            let expected: f64 = mine.iter().map(|j| j.gross_or_zero()).sum();
            assert_eq!(c.total_spent, expected);
            assert_eq!(c.job_count(), mine.len());
            assert!(!c.jobs.is_empty());
        }
    }

    #[test]
    fn aggregation_is_idempotent() {
        let jobs = sample();
        assert_eq!(aggregate_customers(&jobs), aggregate_customers(&jobs));
    }

    #[test]
    fn empty_job_list_has_no_customers() {
        assert!(aggregate_customers(&[]).is_empty());
    }
}
