//! Error types for URL resolution.

use thiserror::Error;

/// Errors that can occur while resolving a URL into a connection target.
#[derive(Debug, Error)]
pub enum Error {
    /// The string is not an absolute URL (missing scheme, bad syntax, ...).
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no host, e.g. `mailto:` URLs.
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// The explicit port cannot be connected to.
    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    /// No explicit port and the scheme has no default port.
    #[error("No port given and no default port for scheme: {0}")]
    MissingPort(String),
}
