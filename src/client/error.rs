//! Error types for the HTTP client.

use thiserror::Error;

use crate::request::Error as RequestError;
use crate::resolver::Error as ResolverError;
use crate::response::Error as ResponseError;

/// Errors that can occur during an HTTP exchange.
#[derive(Debug, Error)]
pub enum Error {
    /// The URL could not be resolved; no network I/O was attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ResolverError),

    /// The method is neither `GET` nor `POST`.
    #[error("Invalid request: {0}")]
    InvalidMethod(#[from] RequestError),

    /// The TCP connection could not be established.
    #[error("Connection to {addr} failed: {source}")]
    ConnectionError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the request or reading the response failed.
    #[error("Transmission error: {0}")]
    TransmissionError(#[from] std::io::Error),

    /// The response could not be parsed.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] ResponseError),
}
