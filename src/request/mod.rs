//! HTTP request construction.
//!
//! This module knows how to turn a method, a request target, a host and
//! optional form arguments into the exact bytes sent over the wire.

mod builder;
mod error;
mod method;

// Re-export public items
pub use builder::{build_request, encode_form, FormArgs, HttpRequest, FORM_CONTENT_TYPE};
pub use error::Error;
pub use method::Method;
