//! Suite definition and builder.

use std::path::{Path, PathBuf};

use tripwire_core::{Expectation, Invariant};

use crate::error::{SuiteError, SuiteResult};
use crate::manifest::Manifest;
use crate::report::Report;
use crate::runner::Runner;

/// A check as declared, before its fragment is validated and its path resolved.
#[derive(Debug, Clone)]
pub(crate) struct Check {
    pub name: String,
    pub path: PathBuf,
    pub fragment: String,
    pub expectation: Expectation,
}

/// A named table of artifact invariants.
#[derive(Debug, Clone)]
pub struct Suite {
    /// Suite name (for reporting).
    name: String,
    /// Checks in declaration order.
    checks: Vec<Check>,
    /// Base path for resolving relative artifact paths.
    base_path: PathBuf,
}

impl Suite {
    /// Create a new, empty suite.
    ///
    /// Relative artifact paths resolve against the current directory until
    /// [`Suite::base_path`] says otherwise.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
            base_path: PathBuf::new(),
        }
    }

    /// Build a suite from a manifest file.
    ///
    /// Artifact paths resolve against the manifest's directory, joined with
    /// the manifest's own `base_path` when it declares one.
    pub fn from_manifest(path: impl AsRef<Path>) -> SuiteResult<Self> {
        let path = path.as_ref();
        let manifest = Manifest::load(path)?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_parsed(manifest, dir).map_err(|e| match e {
            SuiteError::Manifest { message, .. } => SuiteError::manifest(path, message),
            other => other,
        })
    }

    /// Build a suite from manifest source, resolving against `base_path`.
    pub fn from_manifest_source(source: &str, base_path: impl Into<PathBuf>) -> SuiteResult<Self> {
        let manifest = Manifest::parse(source)?;
        Self::from_parsed(manifest, base_path.into())
    }

    fn from_parsed(manifest: Manifest, dir: PathBuf) -> SuiteResult<Self> {
        let base_path = match &manifest.base_path {
            Some(p) => dir.join(p),
            None => dir,
        };
        let mut suite = Self::new(manifest.name).base_path(base_path);
        for entry in manifest.checks {
            let (expectation, fragment) = entry
                .expectation()
                .map_err(|m| SuiteError::manifest("<inline>", m))?;
            let fragment = fragment.to_string();
            suite.checks.push(Check {
                name: entry.name,
                path: entry.artifact,
                fragment,
                expectation,
            });
        }
        Ok(suite)
    }

    /// Set the base path for resolving relative artifact paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Require `fragment` to appear in the artifact at `path`.
    pub fn contains(
        self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: impl Into<String>,
    ) -> Self {
        self.check(name, path, fragment, Expectation::Contains)
    }

    /// Require `fragment` not to appear in the artifact at `path`.
    pub fn absent(
        self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: impl Into<String>,
    ) -> Self {
        self.check(name, path, fragment, Expectation::Absent)
    }

    /// Add an already-built invariant.
    pub fn invariant(self, invariant: Invariant) -> Self {
        self.check(
            invariant.name,
            invariant.path,
            invariant.fragment.as_str(),
            invariant.expectation,
        )
    }

    fn check(
        mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        fragment: impl Into<String>,
        expectation: Expectation,
    ) -> Self {
        self.checks.push(Check {
            name: name.into(),
            path: path.into(),
            fragment: fragment.into(),
            expectation,
        });
        self
    }

    /// Run every check and return the report.
    ///
    /// Fails without touching any artifact if a check is malformed.
    pub fn run(&self) -> SuiteResult<Report> {
        let runner = Runner::new(self)?;
        Ok(runner.run())
    }

    /// Run every check, failing if any of them failed.
    pub fn verify(&self) -> SuiteResult<()> {
        self.run()?.into_result()
    }

    /// Get the suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of declared checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub(crate) fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Resolve a path relative to the base path.
    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::CheckEntry;

    #[test]
    fn test_suite_builder() {
        let suite = Suite::new("theme")
            .base_path("/srv/web")
            .contains("background_is_red", "src/app/globals.css", "--background: #FF0000;")
            .absent("no_next_button", "src/app/page.tsx", "Learn more about Next.js");

        assert_eq!(suite.name(), "theme");
        assert_eq!(suite.len(), 2);
        assert_eq!(suite.checks()[0].name, "background_is_red");
        assert_eq!(suite.checks()[1].expectation, Expectation::Absent);
    }

    #[test]
    fn test_resolve_path() {
        let suite = Suite::new("theme").base_path("/srv/web");
        assert_eq!(
            suite.resolve_path(Path::new("src/app/globals.css")),
            PathBuf::from("/srv/web/src/app/globals.css")
        );
        assert_eq!(
            suite.resolve_path(Path::new("/etc/app.css")),
            PathBuf::from("/etc/app.css")
        );
    }

    #[test]
    fn test_manifest_base_path_is_relative_to_manifest() {
        let source = r##"{ "name": "theme", "base_path": "web",
            "checks": [ { "name": "bg", "artifact": "globals.css", "contains": "#FF0000" } ] }"##;
        let suite = Suite::from_manifest_source(source, "/repo").unwrap();
        assert_eq!(
            suite.resolve_path(&suite.checks()[0].path),
            PathBuf::from("/repo/web/globals.css")
        );
    }

    #[test]
    fn test_unvalidated_manifest_entry_is_an_error() {
        let manifest = Manifest {
            name: "theme".to_string(),
            base_path: None,
            checks: vec![CheckEntry {
                name: "bg".to_string(),
                artifact: PathBuf::from("globals.css"),
                contains: None,
                absent: None,
            }],
        };
        match Suite::from_parsed(manifest, PathBuf::from("/repo")) {
            Err(SuiteError::Manifest { message, .. }) => {
                assert!(message.contains("sets neither"), "{message}")
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }
}
