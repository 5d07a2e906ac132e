//! Exhaustive auditing of untrusted payment links

use crate::{PaymentIntent, UpiCodec, CURRENCY_INR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of auditing a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `errors` is empty
    pub is_valid: bool,

    /// Every failed check, in check order
    pub errors: Vec<String>,

    /// The decoded intent, only when valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PaymentIntent>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>, intent: PaymentIntent) -> Self {
        let is_valid = errors.is_empty();
        Self {
            is_valid,
            errors,
            data: is_valid.then_some(intent),
        }
    }
}

impl UpiCodec {
    /// Audit an arbitrary string.
    ///
    /// Unlike [`UpiCodec::encode`] this never stops at the first problem: a
    /// decodable link gets every check run and every failure recorded.
    pub fn validate(&self, url: &str) -> ValidationReport {
        let intent = match self.parse(url) {
            Ok(intent) => intent,
            Err(e) => {
                debug!(error = %e, "Link failed to decode");
                return ValidationReport {
                    is_valid: false,
                    errors: vec!["Invalid UPI URL format".to_string()],
                    data: None,
                };
            }
        };

        let mut errors = Vec::new();

        if !self.validate_handle(&intent.payee_handle) {
            errors.push(format!("Invalid UPI ID format: {}", intent.payee_handle));
        }

        if intent.payee_name.trim().is_empty() {
            errors.push("Payee name is required".to_string());
        }

        if let Some(amount) = intent.amount {
            if amount <= Decimal::ZERO {
                errors.push(format!("Amount must be greater than zero, got {}", amount));
            }
            if intent.currency.as_deref() != Some(CURRENCY_INR) {
                errors.push(format!("Currency must be {}", CURRENCY_INR));
            }
        }

        if !errors.is_empty() {
            debug!(count = errors.len(), "Link failed validation");
        }

        ValidationReport::from_errors(errors, intent)
    }
}

/// Validate with the default configuration
pub fn validate(url: &str) -> ValidationReport {
    UpiCodec::default().validate(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_link() {
        let report = validate("upi://pay?pa=shop%40upi&pn=Shop&am=12.50&cu=INR");
        assert!(report.is_valid);
        assert!(report.errors.is_empty());

        let data = report.data.unwrap();
        assert_eq!(data.payee_handle, "shop@upi");
        assert_eq!(data.amount, Some(Decimal::new(1250, 2)));
    }

    #[test]
    fn test_undecodable_link() {
        let report = validate("https://pay.example.com");
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Invalid UPI URL format".to_string()]);
        assert!(report.data.is_none());
    }

    #[test]
    fn test_aggregates_errors() {
        let report = validate("upi://pay?pa=a@b&pn=Shop&am=0");
        assert!(!report.is_valid);
        assert!(report.errors.len() >= 2);
        assert!(report.errors.iter().any(|e| e.starts_with("Invalid UPI ID format")));
        assert!(report.errors.iter().any(|e| e.starts_with("Amount must be greater than zero")));
        assert!(report.data.is_none());
    }

    #[test]
    fn test_blank_name() {
        let report = validate("upi://pay?pa=shop@upi&pn=%20%20");
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Payee name is required".to_string()]);
    }

    #[test]
    fn test_negative_amount() {
        let report = validate("upi://pay?pa=shop@upi&pn=Shop&am=-3");
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_report_json() {
        let report = validate("upi://pay?pn=X");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], false);
        assert!(json.get("data").is_none());
    }
}
