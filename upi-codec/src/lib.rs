//! UPI payment-intent links
//!
//! Builds, parses and audits `upi://pay` deep links as understood by
//! UPI-capable payment apps.
//!
//! # Wire format
//!
//! ```text
//! upi://pay?pa=<handle>&pn=<name>[&am=<amount>&cu=INR][&tn=<note>][&tr=<ref>][&url=<receipt>]
//! ```
//!
//! - `encode` is fail-fast: an intent that breaks an invariant is rejected
//!   with [`CodecError::InvalidArgument`]
//! - `decode` never fails loudly: anything unparseable yields `None`
//! - `validate` reports every problem it finds in an arbitrary string

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod amount;
pub mod codec;
pub mod config;
pub mod error;
pub mod handle;
pub mod types;
pub mod validation;

// Re-exports
pub use amount::format_amount;
pub use codec::{decode, encode, general_payment_url, invoice_payment_url, UpiCodec};
pub use config::CodecConfig;
pub use error::{CodecError, DecodeError, Result};
pub use handle::validate_handle;
pub use types::{PaymentIntent, CURRENCY_INR};
pub use validation::{validate, ValidationReport};
