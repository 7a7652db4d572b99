//! HTTP client implementation.

use log::{debug, info};

use crate::client::config::ClientConfig;
use crate::client::connection::Connection;
use crate::client::error::Error;
use crate::request::{FormArgs, HttpRequest, Method};
use crate::resolver::resolve;
use crate::response::{parse_response, HttpResult};

/// An HTTP client.
///
/// Holds configuration only. Every call resolves the URL, opens its own
/// connection, sends one request, reads the response until the server
/// closes the connection, and closes the socket before returning.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    /// The client configuration.
    pub config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Send a GET request to `url`.
    pub fn get(&self, url: &str) -> Result<HttpResult, Error> {
        self.execute(Method::GET, url, None)
    }

    /// Send a POST request to `url` with URL-encoded form arguments.
    pub fn post(&self, url: &str, form: Option<&FormArgs>) -> Result<HttpResult, Error> {
        self.execute(Method::POST, url, form)
    }

    /// Send a request with the given method.
    ///
    /// Form arguments are only used by POST.
    pub fn command(&self, url: &str, method: Method, form: Option<&FormArgs>) -> Result<HttpResult, Error> {
        match method {
            Method::GET => self.get(url),
            Method::POST => self.post(url, form),
        }
    }

    /// Send a request whose method is given as text, e.g. from a command
    /// line. Anything other than `GET` or `POST` (case-sensitive) fails
    /// with [`Error::InvalidMethod`] before any I/O.
    pub fn request(&self, method: &str, url: &str, form: Option<&FormArgs>) -> Result<HttpResult, Error> {
        let method = method.parse::<Method>()?;
        self.command(url, method, form)
    }

    /// Run one exchange: resolve, connect, build, send, receive, close,
    /// parse.
    fn execute(&self, method: Method, url: &str, form: Option<&FormArgs>) -> Result<HttpResult, Error> {
        // Nothing to clean up if either of these fails
        let target = resolve(url)?;
        let mut connection = Connection::connect(target.socket_host(), target.port)?;

        let request = HttpRequest::new(method, target.request_target(), target.host.as_str(), form);
        info!("{method} {url}");

        let raw = match self.transmit(&mut connection, &request) {
            Ok(raw) => raw,
            Err(e) => {
                connection.close();
                return Err(e);
            }
        };
        connection.close();

        let result = parse_response(&raw)?;
        debug!("{method} {url} returned {code}", code = result.status_code);
        Ok(result)
    }

    /// Write the request and read the whole response.
    fn transmit(&self, connection: &mut Connection, request: &HttpRequest) -> Result<Vec<u8>, Error> {
        connection.send_all(&request.to_bytes())?;
        connection.receive_all(self.config.read_chunk_size)
    }
}
