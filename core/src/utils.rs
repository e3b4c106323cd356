//! Utility functions and types.

use std::fmt::Debug;

/// Returns true if the value is absent, empty or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Returns the value if it's not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Redacts a secret for `Debug` output.
///
/// - Empty input is shown as `EMPTY`.
/// - Input shorter than 12 characters is fully hidden.
/// - Longer input keeps its first and last three characters.
///
/// Keeping the edges lets users tell different keys apart without leaking them.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars: Vec<char> = self.0.chars().collect();
        match chars.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 => f.write_str("***"),
            n => {
                let head: String = chars[..3].iter().collect();
                let tail: String = chars[n - 3..].iter().collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}
