//! Suite reports.

use std::fmt;
use std::path::{Path, PathBuf};

use tripwire_core::{CheckFailure, CheckResult, Expectation, Invariant};

use crate::error::{SuiteError, SuiteResult};

/// The outcome of a single check.
#[derive(Debug)]
pub struct Outcome {
    name: String,
    path: PathBuf,
    expectation: Expectation,
    failure: Option<CheckFailure>,
}

impl Outcome {
    pub(crate) fn new(invariant: &Invariant, result: CheckResult<()>) -> Self {
        Self {
            name: invariant.name.clone(),
            path: invariant.path.clone(),
            expectation: invariant.expectation,
            failure: result.err(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expectation(&self) -> Expectation {
        self.expectation
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&CheckFailure> {
        self.failure.as_ref()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "PASS {}", self.name),
            Some(failure) => write!(f, "FAIL {}: {}", self.name, failure),
        }
    }
}

/// Outcomes of one suite run, in declaration order.
#[derive(Debug)]
pub struct Report {
    suite: String,
    outcomes: Vec<Outcome>,
}

impl Report {
    pub(crate) fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Check if every check passed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    /// Get the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Turn a failing report into [`SuiteError::ChecksFailed`].
    pub fn into_result(self) -> SuiteResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(SuiteError::checks_failed(
                self.suite.clone(),
                self.failed(),
                self.outcomes.len(),
            ))
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(
            f,
            "{}: {} passed, {} failed, {} total",
            self.suite,
            self.passed(),
            self.failed(),
            self.outcomes.len()
        )
    }
}
