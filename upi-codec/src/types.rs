//! Payment intent value type

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The only currency UPI links carry
pub const CURRENCY_INR: &str = "INR";

/// A request to pay a UPI payee.
///
/// Pure value: no identity beyond its fields. Built, turned into a URL (or
/// parsed out of one) and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Virtual payment address, `localpart@domain`
    pub payee_handle: String,

    /// Merchant or recipient display name
    pub payee_name: String,

    /// Amount to pay; always paired with `currency`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Currency code, `INR` whenever `amount` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Free-text transaction note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// External reference or order id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,

    /// Link to an invoice or receipt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl PaymentIntent {
    /// Create an intent with only the mandatory fields
    pub fn new(payee_handle: impl Into<String>, payee_name: impl Into<String>) -> Self {
        Self {
            payee_handle: payee_handle.into(),
            payee_name: payee_name.into(),
            amount: None,
            currency: None,
            note: None,
            transaction_ref: None,
            receipt_url: None,
        }
    }

    /// Set the amount (and its INR currency)
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self.currency = Some(CURRENCY_INR.to_string());
        self
    }

    /// Set the transaction note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the transaction reference
    pub fn with_transaction_ref(mut self, transaction_ref: impl Into<String>) -> Self {
        self.transaction_ref = Some(transaction_ref.into());
        self
    }

    /// Set the receipt URL
    pub fn with_receipt_url(mut self, receipt_url: impl Into<String>) -> Self {
        self.receipt_url = Some(receipt_url.into());
        self
    }
}
