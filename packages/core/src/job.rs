//! Job domain types: one billable junk-removal service event.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a job, using ULID for chronological sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Ulid);

impl JobId {
    /// Create a new unique job ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a job ID from a string.
    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the customer behind a job found the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketingSource {
    Google,
    #[serde(rename = "Yard Sign")]
    YardSign,
    Nextdoor,
    Facebook,
    Instagram,
    Referral,
    #[serde(rename = "Repeat Customer")]
    RepeatCustomer,
    Realtor,
    Other,
}

impl MarketingSource {
    /// Every source, in the order the job form lists them.
    pub const ALL: [MarketingSource; 9] = [
        MarketingSource::Google,
        MarketingSource::YardSign,
        MarketingSource::Nextdoor,
        MarketingSource::Facebook,
        MarketingSource::Instagram,
        MarketingSource::Referral,
        MarketingSource::RepeatCustomer,
        MarketingSource::Realtor,
        MarketingSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketingSource::Google => "Google",
            MarketingSource::YardSign => "Yard Sign",
            MarketingSource::Nextdoor => "Nextdoor",
            MarketingSource::Facebook => "Facebook",
            MarketingSource::Instagram => "Instagram",
            MarketingSource::Referral => "Referral",
            MarketingSource::RepeatCustomer => "Repeat Customer",
            MarketingSource::Realtor => "Realtor",
            MarketingSource::Other => "Other",
        }
    }
}

impl std::fmt::Display for MarketingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MarketingSource {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| crate::Error::Validation(format!("Unknown marketing source: {s}")))
    }
}

/// Derived profit/loss figures for a single job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitLoss {
    pub total_expenses: f64,
    pub profit: f64,
    /// Profit as a percentage of gross; 0 when there is no revenue.
    pub margin: f64,
}

impl ProfitLoss {
    /// Compute totals from gross revenue and the individual expense items.
    pub fn compute(gross: f64, expenses: [f64; 5]) -> Self {
        let total_expenses: f64 = expenses.iter().sum();
        let profit = gross - total_expenses;
        let margin = if gross > 0.0 {
            profit / gross * 100.0
        } else {
            0.0
        };

        Self {
            total_expenses,
            profit,
            margin,
        }
    }
}

/// A job represents one completed junk-removal service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for this job.
    pub id: JobId,
    /// Service date.
    pub date: NaiveDate,
    pub customer_name: String,
    /// Customer phone number; jobs sharing it belong to one customer.
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    pub marketing_source: MarketingSource,
    /// Gross revenue. Older records may not carry it.
    #[serde(default)]
    pub gross: Option<f64>,
    #[serde(default)]
    pub dump_fee: f64,
    #[serde(default)]
    pub labor: f64,
    #[serde(default)]
    pub gas: f64,
    #[serde(default)]
    pub uhaul: f64,
    #[serde(default)]
    pub other_expenses: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub margin: f64,
    /// When the job was first saved.
    pub created_at: DateTime<Utc>,
    /// When the job was last saved.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Gross revenue, with a missing value counted as zero.
    pub fn gross_or_zero(&self) -> f64 {
        self.gross.unwrap_or(0.0)
    }

    /// The five expense line items in form order.
    pub fn expense_items(&self) -> [f64; 5] {
        [
            self.dump_fee,
            self.labor,
            self.gas,
            self.uhaul,
            self.other_expenses,
        ]
    }

    pub fn profit_loss(&self) -> ProfitLoss {
        ProfitLoss {
            total_expenses: self.total_expenses,
            profit: self.profit,
            margin: self.margin,
        }
    }

    /// Re-derive total expenses, profit and margin from the raw inputs.
    pub fn recompute(&mut self) {
        let pl = ProfitLoss::compute(self.gross_or_zero(), self.expense_items());
        self.total_expenses = pl.total_expenses;
        self.profit = pl.profit;
        self.margin = pl.margin;
    }

    /// Whether the job made money (break-even counts as profit).
    pub fn is_profitable(&self) -> bool {
        self.profit >= 0.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn worked_example_margin() {
        let pl = ProfitLoss::compute(450.0, [80.0, 60.0, 20.0, 0.0, 0.0]);
        assert_eq!(pl.total_expenses, 160.0);
        assert_eq!(pl.profit, 290.0);
        assert!((pl.margin - 64.444).abs() < 0.01);
    }

    #[test]
    fn zero_gross_has_zero_margin() {
        let pl = ProfitLoss::compute(0.0, [25.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(pl.profit, -25.0);
        assert_eq!(pl.margin, 0.0);
    }

    #[test]
    fn marketing_source_uses_display_names() {
        let json = serde_json::to_string(&MarketingSource::YardSign).unwrap();
        assert_eq!(json, "\"Yard Sign\"");
        let parsed: MarketingSource = "Repeat Customer".parse().unwrap();
        assert_eq!(parsed, MarketingSource::RepeatCustomer);
        assert!("Billboard".parse::<MarketingSource>().is_err());
    }

    #[test]
    fn missing_gross_deserializes_as_none() {
        let raw = r#"{
            "id": "01HZX3K6J8Q4W2V9T5R7M1N0PB",
            "date": "2024-03-01",
            "customer_name": "Dana",
            "phone": "555",
            "address": "1 Elm St",
            "marketing_source": "Google",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-01T12:00:00Z"
        }"#;
        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.gross, None);
        assert_eq!(job.gross_or_zero(), 0.0);
        assert_eq!(job.email, None);
        assert_eq!(job.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
