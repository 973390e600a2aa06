//! Check failure types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for checks.
pub type CheckResult<T> = Result<T, CheckFailure>;

/// Reasons a check can fail.
///
/// `ResourceUnavailable` is an infrastructure defect (the artifact was never
/// produced or cannot be read) and is kept apart from the content defects.
#[derive(Debug, Error)]
pub enum CheckFailure {
    /// The artifact does not exist, cannot be read, or is not UTF-8 text.
    #[error("resource unavailable: failed to read '{path}': {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but does not contain the expected fragment.
    #[error("fragment not found: expected `{fragment}` in '{path}'")]
    InvariantViolation { path: PathBuf, fragment: String },

    /// The artifact contains a fragment that must not be there.
    #[error("forbidden fragment present: found `{fragment}` in '{path}'")]
    ForbiddenFragment { path: PathBuf, fragment: String },

    /// A fragment was built from the empty string.
    #[error("empty fragment: a fragment must contain at least one character")]
    EmptyFragment,
}

impl CheckFailure {
    pub fn resource_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn invariant_violation(path: impl Into<PathBuf>, fragment: impl Into<String>) -> Self {
        Self::InvariantViolation {
            path: path.into(),
            fragment: fragment.into(),
        }
    }

    pub fn forbidden_fragment(path: impl Into<PathBuf>, fragment: impl Into<String>) -> Self {
        Self::ForbiddenFragment {
            path: path.into(),
            fragment: fragment.into(),
        }
    }

    /// The fixed, human-readable reason for this failure.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable { .. } => "resource unavailable",
            Self::InvariantViolation { .. } => "fragment not found",
            Self::ForbiddenFragment { .. } => "forbidden fragment present",
            Self::EmptyFragment => "empty fragment",
        }
    }

    /// The artifact path involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ResourceUnavailable { path, .. }
            | Self::InvariantViolation { path, .. }
            | Self::ForbiddenFragment { path, .. } => Some(path.as_path()),
            Self::EmptyFragment => None,
        }
    }

    /// The fragment involved, if any.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::InvariantViolation { fragment, .. } | Self::ForbiddenFragment { fragment, .. } => {
                Some(fragment.as_str())
            }
            _ => None,
        }
    }

    /// Check if the artifact itself could not be read.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }

    /// Check if the artifact was read and its content broke the invariant.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Self::InvariantViolation { .. } | Self::ForbiddenFragment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_are_fixed() {
        let missing = CheckFailure::invariant_violation("a.css", "--x: 1;");
        assert_eq!(missing.reason(), "fragment not found");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let unavailable = CheckFailure::resource_unavailable("a.css", io);
        assert_eq!(unavailable.reason(), "resource unavailable");
        assert!(unavailable.is_resource_unavailable());
        assert!(!unavailable.is_violation());

        assert_eq!(CheckFailure::EmptyFragment.reason(), "empty fragment");
    }

    #[test]
    fn test_violation_message_names_fragment_and_path() {
        let err = CheckFailure::invariant_violation("src/app/globals.css", "--background: #FF0000;");
        let message = err.to_string();
        assert!(message.contains("--background: #FF0000;"));
        assert!(message.contains("src/app/globals.css"));
        assert_eq!(err.fragment(), Some("--background: #FF0000;"));
    }
}
