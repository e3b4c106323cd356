use std::fmt;
use thiserror::Error;

use crate::Violation;

/// The error type for headsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    violations: Vec<Violation>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// One or more required input fields are blank or malformed.
    ///
    /// All problems are reported together, see [`Error::violations`].
    RequestInvalid,

    /// The target URL is not a valid absolute URL
    UrlInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            violations: Vec::new(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the validation problems that caused this error.
    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = violations;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Validation problems in the order they were found.
    ///
    /// Empty unless the kind is [`ErrorKind::RequestInvalid`].
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Check if the caller can fix this error by changing the input.
    pub fn is_input_error(&self) -> bool {
        matches!(self.kind, ErrorKind::RequestInvalid | ErrorKind::UrlInvalid)
    }
}

// Convenience constructors
impl Error {
    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a url invalid error
    pub fn url_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UrlInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::UrlInvalid => write!(f, "invalid url"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::url_invalid(format!("target url is not a valid absolute url: {err}"))
            .with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
