//! Suite runner.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use tripwire_core::{Fragment, Invariant};

use crate::error::{SuiteError, SuiteResult};
use crate::report::{Outcome, Report};
use crate::suite::Suite;

/// Evaluates the invariants of one suite.
pub(crate) struct Runner<'s> {
    suite: &'s Suite,
    invariants: Vec<Invariant>,
}

impl<'s> Runner<'s> {
    /// Validate every declared check and resolve its artifact path.
    pub fn new(suite: &'s Suite) -> SuiteResult<Self> {
        if suite.name().trim().is_empty() {
            return Err(SuiteError::invalid_name(suite.name(), "suite name is empty"));
        }
        if suite.is_empty() {
            return Err(SuiteError::empty_suite(suite.name()));
        }

        let mut seen = HashSet::new();
        let mut invariants = Vec::with_capacity(suite.len());
        for check in suite.checks() {
            if check.name.trim().is_empty() {
                return Err(SuiteError::invalid_name(
                    suite.name(),
                    format!("a check on '{}' has an empty name", check.path.display()),
                ));
            }
            if !seen.insert(check.name.as_str()) {
                return Err(SuiteError::duplicate_check(suite.name(), &check.name));
            }
            let fragment = Fragment::new(check.fragment.as_str())
                .map_err(|e| SuiteError::invalid_check(suite.name(), &check.name, e))?;
            invariants.push(Invariant::new(
                &check.name,
                suite.resolve_path(&check.path),
                fragment,
                check.expectation,
            ));
        }

        Ok(Self { suite, invariants })
    }

    /// Run every invariant in declaration order.
    pub fn run(&self) -> Report {
        let mut report = Report::new(self.suite.name());

        for invariant in &self.invariants {
            debug!(
                suite = self.suite.name(),
                check = %invariant.name,
                path = %invariant.path.display(),
                expectation = %invariant.expectation,
                "running check"
            );

            let result = invariant.check();
            if let Err(ref failure) = result {
                warn!(
                    suite = self.suite.name(),
                    check = %invariant.name,
                    reason = failure.reason(),
                    "check failed: {failure}"
                );
            }
            report.push(Outcome::new(invariant, result));
        }

        info!(
            suite = self.suite.name(),
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        report
    }
}
