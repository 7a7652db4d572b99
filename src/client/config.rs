//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default number of bytes requested per socket read.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// The read buffer size used while receiving a response.
    pub read_chunk_size: usize,
}

impl ClientConfig {
    /// Set the read chunk size. Zero falls back to the default.
    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = if size == 0 { DEFAULT_READ_CHUNK_SIZE } else { size };
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}
