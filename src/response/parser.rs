//! HTTP response representation and parsing.

use serde::{Deserialize, Serialize};

use crate::response::error::Error;

/// The blank line that ends the header block.
pub const HEADER_BODY_DELIMITER: &str = "\r\n\r\n";

/// The outcome of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResult {
    /// The numeric status code from the status line
    pub status_code: u16,
    /// Everything before the first blank line, status line included
    pub header_block: String,
    /// Everything after the first blank line
    pub body: String,
}

impl HttpResult {
    /// Iterate over the header fields as `(name, value)` pairs.
    ///
    /// The status line and any line without a colon are skipped. Names and
    /// values are trimmed.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header_block
            .split("\r\n")
            .skip(1)
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
    }

    /// Get a header value.
    ///
    /// Headers are case-insensitive; the first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

/// Parse an HTTP response from the bytes read off the wire.
///
/// # Arguments
///
/// * `input` - The complete response, as read until end-of-stream
///
/// # Returns
///
/// The status code, header block and body, or an error if the response
/// is not UTF-8, has no numeric status code or has no blank line.
pub fn parse_response(input: &[u8]) -> Result<HttpResult, Error> {
    let text = std::str::from_utf8(input)?;

    // "HTTP/1.1 200 OK" -> 200
    let code = text.split_whitespace().nth(1).ok_or(Error::MissingStatusCode)?;
    let status_code = code
        .parse::<u16>()
        .map_err(|_| Error::InvalidStatusCode(code.to_string()))?;

    // Only the first blank line counts; the body may contain more
    let (header_block, body) = text
        .split_once(HEADER_BODY_DELIMITER)
        .ok_or(Error::MissingDelimiter)?;

    Ok(HttpResult {
        status_code,
        header_block: header_block.to_string(),
        body: body.to_string(),
    })
}
