//! HTTP transport.
//!
//! Owns the socket side of an exchange: opening the TCP connection,
//! writing the request, reading until the server hangs up and closing
//! the connection again. `HttpClient` ties this together with URL
//! resolution, request building and response parsing.

mod config;
mod connection;
mod error;
mod http_client;

// Re-export public items
pub use config::{ClientConfig, DEFAULT_READ_CHUNK_SIZE};
pub use connection::{receive_all, send_all, Connection};
pub use error::Error;
pub use http_client::HttpClient;
