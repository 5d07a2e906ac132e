//! Error types for the UPI codec

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// Intent violates a mandatory-field, handle or amount invariant
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a string failed to parse as a payment intent.
///
/// Only surfaced through [`crate::UpiCodec::parse`]; the public `decode`
/// contract collapses all of these into `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not a URL at all
    #[error("Malformed URL: {0}")]
    Malformed(#[from] url::ParseError),

    /// Scheme other than `upi:`
    #[error("Unsupported scheme: {0}")]
    Scheme(String),

    /// Authority/path is not `//pay`
    #[error("Not a payment intent: {0}")]
    NotPayIntent(String),

    /// `pa` or `pn` absent or empty
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// `am` present but not a decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
