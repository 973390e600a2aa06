//! Error types for suites.

use std::path::PathBuf;
use thiserror::Error;
use tripwire_core::CheckFailure;

/// Result type for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur when building or running a suite.
///
/// Individual check failures are not errors at this level; they are collected
/// into a [`Report`](crate::Report). Only [`SuiteError::ChecksFailed`] turns a
/// failing report into an error.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Failed to read a manifest file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest is malformed or declares an invalid check.
    #[error("invalid manifest '{path}': {message}")]
    Manifest { path: PathBuf, message: String },

    /// A check declared through the builder cannot be evaluated.
    #[error("check '{check}' in suite '{suite}' is invalid: {source}")]
    InvalidCheck {
        suite: String,
        check: String,
        #[source]
        source: CheckFailure,
    },

    /// A suite or check name is empty or blank.
    #[error("invalid name in suite '{suite}': {message}")]
    InvalidName { suite: String, message: String },

    /// Two checks share a name.
    #[error("check '{check}' is declared more than once in suite '{suite}'")]
    DuplicateCheck { suite: String, check: String },

    /// Suite has nothing to check.
    #[error("suite '{suite}' declares no checks")]
    EmptySuite { suite: String },

    /// One or more checks failed.
    #[error("suite '{suite}': {failed} of {total} checks failed")]
    ChecksFailed {
        suite: String,
        failed: usize,
        total: usize,
    },
}

impl SuiteError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_check(
        suite: impl Into<String>,
        check: impl Into<String>,
        source: CheckFailure,
    ) -> Self {
        Self::InvalidCheck {
            suite: suite.into(),
            check: check.into(),
            source,
        }
    }

    pub fn invalid_name(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            suite: suite.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_check(suite: impl Into<String>, check: impl Into<String>) -> Self {
        Self::DuplicateCheck {
            suite: suite.into(),
            check: check.into(),
        }
    }

    pub fn empty_suite(suite: impl Into<String>) -> Self {
        Self::EmptySuite {
            suite: suite.into(),
        }
    }

    pub fn checks_failed(suite: impl Into<String>, failed: usize, total: usize) -> Self {
        Self::ChecksFailed {
            suite: suite.into(),
            failed,
            total,
        }
    }

    /// Check if this error means checks ran and some failed, as opposed to a
    /// configuration problem that kept them from running.
    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::ChecksFailed { .. })
    }
}
