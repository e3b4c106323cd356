use http::Method;
use url::Url;

use crate::utils::non_blank;
use crate::{Error, Result, Violation};

/// Standard HTTP methods accepted for signing.
const METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::PATCH,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
];

/// Components that can be extracted from a target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    /// Host name without port, e.g. `example.com`.
    Hostname,
    /// Path, e.g. `/foo/bar`. Always starts with `/` for http(s) urls.
    Pathname,
    /// Query string without the leading `?` and without fragment.
    Search,
}

/// Extract a single component from an absolute URL.
///
/// Returns [`ErrorKind::UrlInvalid`](crate::ErrorKind::UrlInvalid) if the URL
/// can't be parsed or has no host.
pub fn url_field(target_url: &str, field: UrlField) -> Result<String> {
    let url = parse_url(target_url)?;
    let value = match field {
        UrlField::Hostname => hostname(&url)?,
        UrlField::Pathname => url.path(),
        UrlField::Search => url.query().unwrap_or_default(),
    };
    Ok(value.to_string())
}

/// Parse the method token case-insensitively into one of the standard methods.
///
/// The token is not trimmed: `" GET"` is not a standard method.
pub fn parse_method(method: &str) -> Option<Method> {
    let method = method.to_ascii_uppercase();
    METHODS.into_iter().find(|m| m.as_str() == method)
}

/// Signing context for request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method, upper case.
    pub method: Method,
    /// Host name of the target url, without port.
    pub host: String,
    /// Path of the target url, as returned by the url parser.
    pub path: String,
    /// Raw query string, trimmed. Not sorted and not re-encoded.
    pub query: String,
}

impl SigningRequest {
    /// Build a signing context from an optional method and a target url.
    ///
    /// The method defaults to `GET` when absent or blank. An unknown method
    /// fails with [`ErrorKind::RequestInvalid`](crate::ErrorKind::RequestInvalid)
    /// carrying a `method` violation.
    pub fn build(method: Option<&str>, target_url: &str) -> Result<Self> {
        let method = match non_blank(method) {
            None => Method::GET,
            Some(m) => parse_method(m).ok_or_else(|| {
                let violation = Violation::new(
                    "method",
                    format!("\"method\" field should be a standard http method. \"{m}\" given."),
                );
                Error::request_invalid(violation.message().to_string())
                    .with_violations(vec![violation])
            })?,
        };

        let url = parse_url(target_url)?;

        Ok(SigningRequest {
            method,
            host: hostname(&url)?.to_string(),
            path: url.path().to_string(),
            query: canonical_query(url.query()).to_string(),
        })
    }
}

fn parse_url(target_url: &str) -> Result<Url> {
    Ok(Url::parse(target_url.trim())?)
}

fn hostname(url: &Url) -> Result<&str> {
    url.host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::url_invalid(format!("target url {url} has no host")))
}

/// Only the part before any further `?` is used, then trimmed.
fn canonical_query(query: Option<&str>) -> &str {
    query
        .and_then(|q| q.split('?').next())
        .map(str::trim)
        .unwrap_or_default()
}
