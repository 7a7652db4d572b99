//! URL parsing and port/path defaulting.

use log::debug;
use url::Url;

use crate::resolver::error::Error;

/// Default port for the `http` scheme.
pub const HTTP_PORT: u16 = 80;

/// Default port for the `https` scheme.
pub const HTTPS_PORT: u16 = 443;

/// A URL broken into the components the client cares about.
///
/// Nothing is defaulted yet: `port` and `path` are `None` when the URL
/// does not spell them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The URL scheme, lowercased (`http`, `https`, ...)
    pub scheme: String,
    /// The host as written in the URL (IPv6 literals keep their brackets)
    pub host: String,
    /// The explicit port, if any
    pub port: Option<u16>,
    /// The path, if non-empty
    pub path: Option<String>,
    /// The query string without the leading `?`, if non-empty
    pub query: Option<String>,
}

impl ParsedUrl {
    /// Apply the port and path defaulting rules.
    ///
    /// An explicit port always wins. Otherwise `http` maps to 80 and
    /// `https` to 443; any other scheme without a port is an error.
    /// Port 0 is not a connectable TCP port and is rejected.
    pub fn resolve(self) -> Result<ResolvedTarget, Error> {
        let port = match (self.port, self.scheme.as_str()) {
            (Some(0), _) => return Err(Error::InvalidPort(0)),
            (Some(port), _) => port,
            (None, "http") => HTTP_PORT,
            (None, "https") => HTTPS_PORT,
            (None, _) => return Err(Error::MissingPort(self.scheme)),
        };

        Ok(ResolvedTarget {
            host: self.host,
            port,
            path: self.path.unwrap_or_else(|| "/".to_string()),
            query: self.query,
        })
    }
}

/// Where a request goes: host, port and the resource on that host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub host: String,
    pub port: u16,
    /// Never empty; `/` when the URL had no path
    pub path: String,
    pub query: Option<String>,
}

impl ResolvedTarget {
    /// The request-target for the request line: the path, plus `?query`
    /// when the URL had one.
    pub fn request_target(&self) -> String {
        match &self.query {
            Some(query) => format!("{path}?{query}", path = self.path),
            None => self.path.clone(),
        }
    }

    /// The host in the form the socket layer accepts. IPv6 literals lose
    /// their brackets; everything else is returned unchanged.
    pub fn socket_host(&self) -> &str {
        self.host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host)
    }
}

/// Parse a URL string into its components.
pub fn parse_url(input: &str) -> Result<ParsedUrl, Error> {
    let url = Url::parse(input.trim()).map_err(|source| Error::InvalidUrl {
        url: input.to_string(),
        source,
    })?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(Error::MissingHost(input.to_string())),
    };

    let path = Some(url.path())
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let query = url.query().filter(|q| !q.is_empty()).map(str::to_string);

    Ok(ParsedUrl {
        scheme: url.scheme().to_string(),
        host,
        port: url.port(),
        path,
        query,
    })
}

/// Parse a URL string and resolve it into a connection target.
pub fn resolve(input: &str) -> Result<ResolvedTarget, Error> {
    let target = parse_url(input)?.resolve()?;
    debug!(
        "Resolved {input} to {host}:{port}{path}",
        host = target.host,
        port = target.port,
        path = target.path
    );
    Ok(target)
}
