//! Review request messages sent to past customers.

use serde::{Deserialize, Serialize};

use crate::{Customer, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPlatform {
    Google,
    Yelp,
}

impl ReviewPlatform {
    pub const ALL: [ReviewPlatform; 2] = [ReviewPlatform::Google, ReviewPlatform::Yelp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewPlatform::Google => "google",
            ReviewPlatform::Yelp => "yelp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReviewPlatform::Google => "Google",
            ReviewPlatform::Yelp => "Yelp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Email,
    Sms,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 2] = [DeliveryMethod::Email, DeliveryMethod::Sms];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Email => "email",
            DeliveryMethod::Sms => "sms",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// What the user picked in the review dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub platform: ReviewPlatform,
    pub review_link: String,
    pub method: DeliveryMethod,
}

/// A message ready to copy, plus where the user should send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedReview {
    pub message: String,
    /// `email to <address>` or `SMS to <phone>`.
    pub destination: String,
}

impl ReviewRequest {
    /// Message text for `customer`. Placeholders stand in for an empty link.
    pub fn message(&self, customer: &Customer) -> String {
        let platform = self.platform.name();
        match self.method {
            DeliveryMethod::Email => {
                let link = non_empty_or(&self.review_link, "[Your review link will appear here]");
                format!(
                    "Hi {name},\n\n\
                     Thank you for choosing us for your junk removal! We hope you're enjoying your clean space.\n\n\
                     If you have a moment, we'd really appreciate it if you could leave us a review on {platform}. \
                     Your feedback helps us serve our community better.\n\n\
                     Leave a review here: {link}\n\n\
                     Thanks again!",
                    name = customer.name,
                )
            }
            DeliveryMethod::Sms => {
                let link = non_empty_or(&self.review_link, "[Link]");
                format!(
                    "Hi {name}! Thanks for choosing us. We'd love a {platform} review! {link}",
                    name = customer.name,
                )
            }
        }
    }

    /// Build the message after checking the customer can receive it.
    pub fn prepare(&self, customer: &Customer) -> Result<PreparedReview> {
        if self.review_link.trim().is_empty() {
            return Err(Error::required("Review link"));
        }

        let destination = match self.method {
            DeliveryMethod::Email if !customer.has_email() => {
                return Err(Error::Precondition(
                    "This customer has no email on file.".to_string(),
                ));
            }
            DeliveryMethod::Email => format!("email to {}", customer.email),
            DeliveryMethod::Sms => format!("SMS to {}", customer.phone),
        };

        Ok(PreparedReview {
            message: self.message(customer),
            destination,
        })
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::aggregate_customers;
    use crate::testing::job;

    fn customer(email: Option<&str>) -> Customer {
        let mut j = job("555-0101", Some(100.0), "2024-01-05");
        j.customer_name = "Jo".to_string();
        j.email = email.map(str::to_string);
        aggregate_customers(&[j]).into_vec().remove(0)
    }

    fn request(method: DeliveryMethod, link: &str) -> ReviewRequest {
        ReviewRequest {
            platform: ReviewPlatform::Yelp,
            review_link: link.to_string(),
            method,
        }
    }

    #[test]
    fn sms_message_is_short() {
        let msg = request(DeliveryMethod::Sms, "https://yelp.com/biz/x").message(&customer(None));
        assert_eq!(
            msg,
            "Hi Jo! Thanks for choosing us. We'd love a Yelp review! https://yelp.com/biz/x"
        );
    }

    #[test]
    fn email_message_uses_placeholder_without_link() {
        let msg = request(DeliveryMethod::Email, "").message(&customer(Some("jo@example.com")));
        assert!(msg.starts_with("Hi Jo,\n\n"));
        assert!(msg.contains("review on Yelp."));
        assert!(msg.contains("Leave a review here: [Your review link will appear here]"));
        assert!(msg.ends_with("Thanks again!"));
    }

    #[test]
    fn email_without_address_is_rejected() {
        let err = request(DeliveryMethod::Email, "https://g.page/r/x")
            .prepare(&customer(None))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Precondition("This customer has no email on file.".to_string())
        );
    }

    #[test]
    fn prepared_review_names_destination() {
        let sms = request(DeliveryMethod::Sms, "https://g.page/r/x")
            .prepare(&customer(None))
            .unwrap();
        assert_eq!(sms.destination, "SMS to 555-0101");

        let email = request(DeliveryMethod::Email, "https://g.page/r/x")
            .prepare(&customer(Some("jo@example.com")))
            .unwrap();
        assert_eq!(email.destination, "email to jo@example.com");
    }

    #[test]
    fn option_values_round_trip() {
        assert_eq!(ReviewPlatform::parse("google"), Some(ReviewPlatform::Google));
        assert_eq!(DeliveryMethod::parse("sms"), Some(DeliveryMethod::Sms));
        assert_eq!(DeliveryMethod::parse("fax"), None);
    }
}
