use std::fmt;

use crate::utils::is_blank;
use crate::{Error, Result};

/// A single problem found in the signing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: String,
    message: String,
}

impl Violation {
    /// Create a violation for the given field path, e.g. `awsConfig.region`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation collects every violation instead of stopping at the first one.
///
/// ```
/// use headsign_core::Validation;
///
/// let mut v = Validation::new();
/// v.require_non_blank("targetUrl", Some(""), "target is blank");
/// v.require_non_blank("awsConfig.region", Some("  "), "region is blank");
/// v.require_non_blank("awsConfig.service", Some("s3"), "service is blank");
///
/// assert!(v.is_invalid());
/// assert_eq!(v.violations().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validation {
    violations: Vec<Violation>,
}

impl Validation {
    /// Create an empty validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Record a violation for `field` if `value` is absent, empty or whitespace-only.
    pub fn require_non_blank(&mut self, field: &str, value: Option<&str>, message: &str) {
        if is_blank(value) {
            self.push(Violation::new(field, message));
        }
    }

    /// Returns true if any violation has been recorded.
    pub fn is_invalid(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Violations in the order they were recorded.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Turn this validation into a result.
    ///
    /// Returns one aggregate [`Error`] carrying all violations if any were recorded.
    pub fn into_result(self) -> Result<()> {
        if !self.is_invalid() {
            return Ok(());
        }

        let mut message = format!("You have {} errors.\n", self.violations.len());
        for v in &self.violations {
            message.push_str("\n– ");
            message.push_str(v.message());
        }

        Err(Error::request_invalid(message).with_violations(self.violations))
    }
}
