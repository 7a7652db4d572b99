//! HTTP response parsing.
//!
//! Splits the raw bytes read off the socket into a status code, the
//! header block and the body.

mod error;
mod parser;

// Re-export public items
pub use error::Error;
pub use parser::{parse_response, HttpResult, HEADER_BODY_DELIMITER};
