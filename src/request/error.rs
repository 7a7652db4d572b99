//! Error types for request construction.

use thiserror::Error;

/// Errors that can occur while preparing an HTTP request.
#[derive(Debug, Error)]
pub enum Error {
    /// The method is not one this client can send. Only `GET` and `POST`
    /// are accepted, and the match is case-sensitive.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}
