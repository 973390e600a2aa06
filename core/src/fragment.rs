//! Literal fragments.

use std::fmt;

use crate::error::{CheckFailure, CheckResult};

/// A non-empty literal searched for verbatim in an artifact.
///
/// Matching is a plain substring test: no whitespace folding, no case folding,
/// no notion of equivalent CSS values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Create a fragment, rejecting the empty string.
    pub fn new(text: impl Into<String>) -> CheckResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CheckFailure::EmptyFragment);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the fragment occurs as a contiguous substring of `content`.
    pub fn occurs_in(&self, content: &str) -> bool {
        content.contains(self.0.as_str())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
