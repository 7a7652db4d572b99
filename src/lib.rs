//! A minimal HTTP/1.1 client built directly on TCP sockets.
//!
//! This library builds GET and POST requests byte by byte, writes them to a
//! plain `TcpStream`, reads the response until the server closes the
//! connection, and splits it into a status code, header block and body.
//!
//! # Features
//!
//! - URL resolution with default ports (80 for `http`, 443 for `https`)
//! - GET requests and POST requests with URL-encoded form bodies
//! - One connection per request, always sent with `Connection: close`
//! - Response parsing into status code, header block and body
//! - Proper error handling with descriptive error messages
//!
//! There is no TLS, keep-alive, chunked decoding, redirect handling or
//! timeout support.
//!
//! # Examples
//!
//! ## Building a request
//!
//! ```
//! use microhttp_client::{build_request, Method};
//!
//! let bytes = build_request(Method::GET, "/index.html", "example.com", None);
//! assert!(bytes.starts_with(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n"));
//! ```
//!
//! ## Parsing a response
//!
//! ```
//! use microhttp_client::parse_response;
//!
//! let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello";
//! let result = parse_response(raw).unwrap();
//! assert_eq!(result.status_code, 200);
//! assert_eq!(result.header_block, "HTTP/1.1 200 OK\r\nContent-Type: text/plain");
//! assert_eq!(result.body, "hello");
//! ```
//!
//! ## Sending a request
//!
//! ```no_run
//! use std::collections::HashMap;
//! use microhttp_client::{Error, HttpClient};
//!
//! let client = HttpClient::default();
//!
//! match client.get("http://example.com/") {
//!     Ok(result) => println!("{} {}", result.status_code, result.body),
//!     Err(Error::ConnectionError { addr, .. }) => println!("Could not reach {}", addr),
//!     Err(err) => println!("Other error: {}", err),
//! }
//!
//! let mut form = HashMap::new();
//! form.insert("name".to_string(), "foo".to_string());
//! let result = client.post("http://example.com/submit", Some(&form))?;
//! println!("{}", result.status_code);
//! # Ok::<(), Error>(())
//! ```

// Export the URL resolution module
pub mod resolver;

// Export the request building module
pub mod request;

// Export the response parsing module
pub mod response;

// Export the client module
pub mod client;

// Re-export commonly used items for convenience
pub use client::{ClientConfig, Connection, Error, HttpClient};
pub use request::{build_request, encode_form, Error as RequestError, FormArgs, HttpRequest, Method};
pub use resolver::{resolve, Error as ResolverError, ResolvedTarget};
pub use response::{parse_response, Error as ResponseError, HttpResult};
