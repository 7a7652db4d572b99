//! URL resolution.
//!
//! Turns a URL string into the host, port and request target a single
//! HTTP exchange needs. No I/O happens here.

mod error;
mod target;

// Re-export public items
pub use error::Error;
pub use target::{parse_url, resolve, ParsedUrl, ResolvedTarget, HTTPS_PORT, HTTP_PORT};
