//! Serialization of HTTP/1.1 requests.

use std::collections::HashMap;

use log::debug;
use url::form_urlencoded;

use crate::request::method::Method;

/// Form arguments for a POST body. Iteration order is irrelevant.
pub type FormArgs = HashMap<String, String>;

/// Content type of every POST body this client sends.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An HTTP request ready to be written to a socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The request method
    pub method: Method,
    /// The request-target (path and optional query)
    pub target: String,
    /// Value of the `Host` header
    pub host: String,
    /// The URL-encoded body; always empty for GET
    pub body: String,
}

impl HttpRequest {
    /// Create a request for `target` on `host`.
    ///
    /// For POST the form arguments are URL-encoded into the body; no
    /// arguments means an empty body. GET requests never carry a body, so
    /// any form arguments passed with GET are dropped.
    pub fn new(
        method: Method,
        target: impl Into<String>,
        host: impl Into<String>,
        form: Option<&FormArgs>,
    ) -> Self {
        let body = match method {
            Method::GET => {
                if form.is_some_and(|f| !f.is_empty()) {
                    debug!("Ignoring form arguments for GET request");
                }
                String::new()
            }
            Method::POST => form.map(encode_form).unwrap_or_default(),
        };

        Self {
            method,
            target: target.into(),
            host: host.into(),
            body,
        }
    }

    /// The header fields in the order they are sent.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Host", self.host.clone()),
            ("Accept", "*/*".to_string()),
            ("Accept-Charset", "UTF-8".to_string()),
        ];

        if self.method == Method::POST {
            headers.push(("Content-Type", FORM_CONTENT_TYPE.to_string()));
            // Byte length, not character count
            headers.push(("Content-Length", self.body.len().to_string()));
        }

        headers.push(("Connection", "close".to_string()));
        headers
    }

    /// Convert the request to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the request line
        let request_line = format!("{method} {target} HTTP/1.1\r\n", method = self.method, target = self.target);
        bytes.extend_from_slice(request_line.as_bytes());

        // Add the headers
        for (name, value) in self.headers() {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body, with no trailing CRLF
        bytes.extend_from_slice(self.body.as_bytes());

        bytes
    }
}

/// Encode form arguments as `application/x-www-form-urlencoded`.
///
/// Spaces become `+` and every byte outside the unreserved set is
/// percent-escaped.
pub fn encode_form(form: &FormArgs) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form.iter())
        .finish()
}

/// Build the complete wire bytes of a request.
pub fn build_request(method: Method, target: &str, host: &str, form: Option<&FormArgs>) -> Vec<u8> {
    HttpRequest::new(method, target, host, form).to_bytes()
}
