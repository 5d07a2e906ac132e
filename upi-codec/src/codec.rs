//! `upi://pay` encoding and decoding

use crate::handle::handle_matches;
use crate::{format_amount, CodecConfig, CodecError, DecodeError, PaymentIntent, Result, CURRENCY_INR};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;
use url::Url;

const SCHEME: &str = "upi";
const PAY_HOST: &str = "pay";

/// Query-component escaping: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Payment link codec
#[derive(Debug, Clone, Default)]
pub struct UpiCodec {
    config: CodecConfig,
}

impl UpiCodec {
    /// Create new codec
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Check a payee handle against this codec's bounds
    pub fn validate_handle(&self, handle: &str) -> bool {
        handle_matches(handle, &self.config)
    }

    /// Build the `upi://pay` link for an intent.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidArgument`] when the handle or name is empty, the
    /// handle is malformed, or an amount is present that is not positive or
    /// not in INR.
    pub fn encode(&self, intent: &PaymentIntent) -> Result<String> {
        if intent.payee_handle.is_empty() || intent.payee_name.is_empty() {
            debug!("Rejecting intent without payee handle or name");
            return Err(CodecError::InvalidArgument(
                "Payee handle and payee name are required".to_string(),
            ));
        }

        if !self.validate_handle(&intent.payee_handle) {
            debug!(handle = %intent.payee_handle, "Rejecting intent with malformed handle");
            return Err(CodecError::InvalidArgument(format!(
                "Invalid payee handle: {}",
                intent.payee_handle
            )));
        }

        let mut params = vec![
            ("pa", escape(&intent.payee_handle)),
            ("pn", escape(&intent.payee_name)),
        ];

        if let Some(amount) = intent.amount {
            if amount <= Decimal::ZERO {
                return Err(CodecError::InvalidArgument(format!(
                    "Amount must be positive, got {}",
                    amount
                )));
            }
            if intent.currency.as_deref() != Some(CURRENCY_INR) {
                return Err(CodecError::InvalidArgument(format!(
                    "Amount requires currency {}, got {:?}",
                    CURRENCY_INR, intent.currency
                )));
            }
            params.push(("am", format_amount(amount)));
            params.push(("cu", CURRENCY_INR.to_string()));
        }

        let optional = [
            ("tn", &intent.note),
            ("tr", &intent.transaction_ref),
            ("url", &intent.receipt_url),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, escape(value)));
            }
        }

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}://{}?{}", SCHEME, PAY_HOST, query))
    }

    /// Parse a link back into an intent, or `None` if it is not one
    pub fn decode(&self, url: &str) -> Option<PaymentIntent> {
        match self.parse(url) {
            Ok(intent) => Some(intent),
            Err(e) => {
                debug!(error = %e, "Failed to decode UPI link");
                None
            }
        }
    }

    /// Parse a link, keeping the failure cause.
    ///
    /// Parameters may appear in any order; the first occurrence of a repeated
    /// key wins. Whenever `am` is present the currency is reported as INR,
    /// whatever `cu` says.
    pub fn parse(&self, url: &str) -> std::result::Result<PaymentIntent, DecodeError> {
        let parsed = Url::parse(url)?;

        if parsed.scheme() != SCHEME {
            return Err(DecodeError::Scheme(parsed.scheme().to_string()));
        }

        // Authority must be the bare `pay` marker: no userinfo, no port
        let is_pay = parsed
            .host_str()
            .map(|host| host.eq_ignore_ascii_case(PAY_HOST))
            .unwrap_or(false)
            && parsed.username().is_empty()
            && parsed.password().is_none()
            && parsed.port().is_none()
            && matches!(parsed.path(), "" | "/");
        if !is_pay {
            return Err(DecodeError::NotPayIntent(format!(
                "{}{}",
                parsed.host_str().unwrap_or_default(),
                parsed.path()
            )));
        }

        let mut payee_handle = None;
        let mut payee_name = None;
        let mut amount = None;
        let mut note = None;
        let mut transaction_ref = None;
        let mut receipt_url = None;

        for (key, value) in parsed.query_pairs() {
            let slot = match key.as_ref() {
                "pa" => &mut payee_handle,
                "pn" => &mut payee_name,
                "am" => &mut amount,
                "tn" => &mut note,
                "tr" => &mut transaction_ref,
                "url" => &mut receipt_url,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let payee_handle = non_empty(payee_handle).ok_or(DecodeError::MissingParameter("pa"))?;
        let payee_name = non_empty(payee_name).ok_or(DecodeError::MissingParameter("pn"))?;

        let amount = match non_empty(amount) {
            Some(raw) => Some(
                Decimal::from_str(raw.trim()).map_err(|_| DecodeError::InvalidAmount(raw))?,
            ),
            None => None,
        };

        Ok(PaymentIntent {
            payee_handle,
            payee_name,
            currency: amount.map(|_| CURRENCY_INR.to_string()),
            amount,
            note: non_empty(note),
            transaction_ref: non_empty(transaction_ref),
            receipt_url: non_empty(receipt_url),
        })
    }

    /// Link for paying an invoice.
    ///
    /// The note reads `Invoice <number>` and the reference is the number.
    pub fn invoice_payment_url(
        &self,
        payee_handle: &str,
        payee_name: &str,
        amount: Decimal,
        invoice_number: &str,
        receipt_url: Option<&str>,
    ) -> Result<String> {
        let mut intent = PaymentIntent::new(payee_handle, payee_name)
            .with_amount(amount)
            .with_note(format!("Invoice {}", invoice_number))
            .with_transaction_ref(invoice_number);
        intent.receipt_url = receipt_url.map(str::to_string);

        self.encode(&intent)
    }

    /// Link for an ad-hoc payment, optionally with an amount and note
    pub fn general_payment_url(
        &self,
        payee_handle: &str,
        payee_name: &str,
        amount: Option<Decimal>,
        note: Option<&str>,
    ) -> Result<String> {
        let mut intent = PaymentIntent::new(payee_handle, payee_name);
        if let Some(amount) = amount {
            intent = intent.with_amount(amount);
        }
        intent.note = note.map(str::to_string);

        self.encode(&intent)
    }
}

fn escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Encode with the default configuration
pub fn encode(intent: &PaymentIntent) -> Result<String> {
    UpiCodec::default().encode(intent)
}

/// Decode with the default configuration
pub fn decode(url: &str) -> Option<PaymentIntent> {
    UpiCodec::default().decode(url)
}

/// See [`UpiCodec::invoice_payment_url`]
pub fn invoice_payment_url(
    payee_handle: &str,
    payee_name: &str,
    amount: Decimal,
    invoice_number: &str,
    receipt_url: Option<&str>,
) -> Result<String> {
    UpiCodec::default().invoice_payment_url(payee_handle, payee_name, amount, invoice_number, receipt_url)
}

/// See [`UpiCodec::general_payment_url`]
pub fn general_payment_url(
    payee_handle: &str,
    payee_name: &str,
    amount: Option<Decimal>,
    note: Option<&str>,
) -> Result<String> {
    UpiCodec::default().general_payment_url(payee_handle, payee_name, amount, note)
}
