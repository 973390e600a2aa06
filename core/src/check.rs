//! Invariant checks.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::artifact::Artifact;
use crate::error::{CheckFailure, CheckResult};
use crate::fragment::Fragment;

/// Verify that the artifact at `path` contains `fragment` verbatim.
///
/// The fragment is validated before the filesystem is touched. A missing or
/// unreadable artifact fails with [`CheckFailure::ResourceUnavailable`], never
/// with [`CheckFailure::InvariantViolation`].
pub fn check_invariant(path: impl AsRef<Path>, fragment: &str) -> CheckResult<()> {
    let fragment = Fragment::new(fragment)?;
    let artifact = Artifact::read(path)?;
    Expectation::Contains.verify(&artifact, &fragment)
}

/// Verify that the artifact at `path` does not contain `fragment`.
pub fn check_absent(path: impl AsRef<Path>, fragment: &str) -> CheckResult<()> {
    let fragment = Fragment::new(fragment)?;
    let artifact = Artifact::read(path)?;
    Expectation::Absent.verify(&artifact, &fragment)
}

/// Whether a fragment must or must not appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// The fragment must occur in the artifact.
    Contains,
    /// The fragment must not occur in the artifact.
    Absent,
}

impl Expectation {
    /// Evaluate this expectation against an artifact already in memory.
    pub fn verify(self, artifact: &Artifact, fragment: &Fragment) -> CheckResult<()> {
        match (self, artifact.contains(fragment)) {
            (Self::Contains, true) | (Self::Absent, false) => Ok(()),
            (Self::Contains, false) => Err(CheckFailure::invariant_violation(
                artifact.path(),
                fragment.as_str(),
            )),
            (Self::Absent, true) => Err(CheckFailure::forbidden_fragment(
                artifact.path(),
                fragment.as_str(),
            )),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains => write!(f, "contains"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// A named expectation about one fragment in one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invariant {
    /// Name used when reporting.
    pub name: String,
    /// Path of the artifact to read.
    pub path: PathBuf,
    /// The literal to look for.
    pub fragment: Fragment,
    /// Whether the literal must be present or absent.
    pub expectation: Expectation,
}

impl Invariant {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: Fragment,
        expectation: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            fragment,
            expectation,
        }
    }

    /// An invariant requiring `fragment` to be present.
    pub fn contains(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: &str,
    ) -> CheckResult<Self> {
        Ok(Self::new(name, path, Fragment::new(fragment)?, Expectation::Contains))
    }

    /// An invariant requiring `fragment` to be absent.
    pub fn absent(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: &str,
    ) -> CheckResult<Self> {
        Ok(Self::new(name, path, Fragment::new(fragment)?, Expectation::Absent))
    }

    /// Read the artifact and evaluate the expectation.
    ///
    /// Each call performs a fresh read; nothing is cached between calls.
    pub fn check(&self) -> CheckResult<()> {
        let artifact = Artifact::read(&self.path)?;
        self.expectation.verify(&artifact, &self.fragment)
    }
}
