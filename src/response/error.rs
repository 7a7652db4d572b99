//! Error types for the HTTP response parser.

use thiserror::Error;

/// Errors that can occur during HTTP response parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The response is not valid UTF-8.
    #[error("Response is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The status line has no second token.
    #[error("Missing status code in response")]
    MissingStatusCode,

    /// The second token of the status line is not a number.
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(String),

    /// There is no blank line separating the header block from the body.
    #[error("Missing blank line between headers and body")]
    MissingDelimiter,
}
