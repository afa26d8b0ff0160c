//! Error types for the Canada Post client.
//!
//! Every failure surfaces synchronously through [`Error`]; nothing is
//! retried or locally recovered. Validation failures are raised when a value
//! object is constructed, precondition failures when a request is built, and
//! transport failures when a request is sent.

use thiserror::Error;

/// Client error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// A value-object field was malformed or out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// A country could not be resolved to an ISO 3166-1 alpha-2 code.
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// A Canadian province/territory could not be resolved to its code.
    #[error("unknown province: {0}")]
    UnknownProvince(String),

    /// Required cross-field data was missing when a request was built.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Transport-level failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// An error from the underlying XML library.
    #[error("XML processing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required element was absent from a response document.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// A response field could not be parsed into its typed form.
    #[error("failed to parse value: {0}")]
    ParseValue(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
