//! Raw job form input and the save-time profit/loss calculation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Job, JobId, MarketingSource, ProfitLoss, Result};

/// Job form exactly as the user typed it. Every field is text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobForm {
    pub date: String,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub marketing_source: String,
    pub gross: String,
    pub dump_fee: String,
    pub labor: String,
    pub gas: String,
    pub uhaul: String,
    pub other_expenses: String,
}

impl JobForm {
    /// An empty form dated `today`, expenses pre-filled with zero.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            customer_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            marketing_source: String::new(),
            gross: String::new(),
            dump_fee: "0".to_string(),
            labor: "0".to_string(),
            gas: "0".to_string(),
            uhaul: "0".to_string(),
            other_expenses: "0".to_string(),
        }
    }

    /// Pre-fill the form from a saved job for editing.
    pub fn from_job(job: &Job) -> Self {
        Self {
            date: job.date.format("%Y-%m-%d").to_string(),
            customer_name: job.customer_name.clone(),
            phone: job.phone.clone(),
            email: job.email.clone().unwrap_or_default(),
            address: job.address.clone(),
            marketing_source: job.marketing_source.to_string(),
            gross: match job.gross {
                Some(gross) if gross != 0.0 => gross.to_string(),
                _ => String::new(),
            },
            dump_fee: job.dump_fee.to_string(),
            labor: job.labor.to_string(),
            gas: job.gas.to_string(),
            uhaul: job.uhaul.to_string(),
            other_expenses: job.other_expenses.to_string(),
        }
    }

    /// Check the required fields, returning the first one that is missing.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("Date", &self.date),
            ("Customer name", &self.customer_name),
            ("Phone", &self.phone),
            ("Address", &self.address),
            ("Marketing source", &self.marketing_source),
            ("Gross", &self.gross),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(Error::required(label));
            }
        }
        Ok(())
    }

    /// Profit/loss preview for the current input.
    pub fn profit_loss(&self) -> ProfitLoss {
        ProfitLoss::compute(
            parse_amount(&self.gross),
            [
                parse_amount(&self.dump_fee),
                parse_amount(&self.labor),
                parse_amount(&self.gas),
                parse_amount(&self.uhaul),
                parse_amount(&self.other_expenses),
            ],
        )
    }

    /// Build the job to persist under `id`. Derived fields are always
    /// recomputed here, both for new jobs and for edits.
    pub fn into_job(self, id: JobId, created_at: DateTime<Utc>) -> Result<Job> {
        self.validate()?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| Error::Validation(format!("Invalid date: {}", self.date)))?;
        let marketing_source: MarketingSource = self.marketing_source.trim().parse()?;
        let email = Some(self.email.trim().to_string()).filter(|e| !e.is_empty());

        let mut job = Job {
            id,
            date,
            customer_name: self.customer_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email,
            address: self.address.trim().to_string(),
            marketing_source,
            gross: Some(parse_amount(&self.gross)),
            dump_fee: parse_amount(&self.dump_fee),
            labor: parse_amount(&self.labor),
            gas: parse_amount(&self.gas),
            uhaul: parse_amount(&self.uhaul),
            other_expenses: parse_amount(&self.other_expenses),
            total_expenses: 0.0,
            profit: 0.0,
            margin: 0.0,
            created_at,
            updated_at: Utc::now(),
        };
        job.recompute();
        Ok(job)
    }
}

/// Parse a money field; empty or unreadable input counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn filled_form() -> JobForm {
        JobForm {
            date: "2024-05-14".to_string(),
            customer_name: "Maria Lopez".to_string(),
            phone: "(512) 555-0199".to_string(),
            email: String::new(),
            address: "12 Oak Ln, Austin, TX".to_string(),
            marketing_source: "Nextdoor".to_string(),
            gross: "450".to_string(),
            dump_fee: "80".to_string(),
            labor: "60".to_string(),
            gas: "20".to_string(),
            uhaul: "".to_string(),
            other_expenses: "abc".to_string(),
        }
    }

    #[test]
    fn parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("  "), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
    }

    #[test]
    fn into_job_recomputes_derived_fields() {
        let job = filled_form().into_job(JobId::new(), Utc::now()).unwrap();
        assert_eq!(job.gross, Some(450.0));
        assert_eq!(job.uhaul, 0.0);
        assert_eq!(job.other_expenses, 0.0);
        assert_eq!(job.total_expenses, 160.0);
        assert_eq!(job.profit, 290.0);
        assert!((job.margin - 64.44).abs() < 0.01);
        assert_eq!(job.email, None);
        assert_eq!(job.marketing_source, MarketingSource::Nextdoor);
    }

    #[test]
    fn edit_round_trip_keeps_values() {
        let id = JobId::new();
        let job = filled_form().into_job(id, Utc::now()).unwrap();
        let mut form = JobForm::from_job(&job);
        form.labor = "100".to_string();
        let edited = form.into_job(id, job.created_at).unwrap();
        assert_eq!(edited.id, id);
        assert_eq!(edited.total_expenses, 200.0);
        assert_eq!(edited.profit, 250.0);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut form = filled_form();
        form.phone = "   ".to_string();
        let err = form.into_job(JobId::new(), Utc::now()).unwrap_err();
        assert_eq!(err, Error::Validation("Phone is required".to_string()));
    }

    #[test]
    fn bad_date_is_rejected() {
        let mut form = filled_form();
        form.date = "05/14/2024".to_string();
        assert!(matches!(
            form.into_job(JobId::new(), Utc::now()),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn blank_form_is_dated_today() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let form = JobForm::blank(today);
        assert_eq!(form.date, "2024-02-29");
        assert_eq!(form.dump_fee, "0");
        assert!(form.validate().is_err());
    }
}
