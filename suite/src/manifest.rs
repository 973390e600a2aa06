//! Loader for suite manifests.
//!
//! A manifest is a JSON document naming a suite and listing its checks:
//!
//! ```json
//! {
//!   "name": "theme",
//!   "checks": [
//!     { "name": "background_is_red", "artifact": "src/app/globals.css",
//!       "contains": "--background: #FF0000;" },
//!     { "name": "no_next_button", "artifact": "src/app/page.tsx",
//!       "absent": "Learn more about Next.js" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tripwire_core::Expectation;

use crate::error::{SuiteError, SuiteResult};

/// A parsed, validated manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Suite name (for reporting).
    pub name: String,
    /// Directory artifact paths resolve against, relative to the manifest.
    #[serde(default)]
    pub base_path: Option<PathBuf>,
    /// Checks in declaration order.
    pub checks: Vec<CheckEntry>,
}

/// One check as declared in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckEntry {
    pub name: String,
    pub artifact: PathBuf,
    /// Fragment that must appear.
    #[serde(default)]
    pub contains: Option<String>,
    /// Fragment that must not appear.
    #[serde(default)]
    pub absent: Option<String>,
}

impl CheckEntry {
    /// The expectation and fragment declared by this entry.
    pub fn expectation(&self) -> Result<(Expectation, &str), String> {
        let (expectation, fragment) = match (&self.contains, &self.absent) {
            (Some(f), None) => (Expectation::Contains, f.as_str()),
            (None, Some(f)) => (Expectation::Absent, f.as_str()),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "check '{}' sets both `contains` and `absent`",
                    self.name
                ))
            }
            (None, None) => {
                return Err(format!(
                    "check '{}' sets neither `contains` nor `absent`",
                    self.name
                ))
            }
        };
        if fragment.is_empty() {
            return Err(format!("check '{}' has an empty fragment", self.name));
        }
        Ok((expectation, fragment))
    }
}

impl Manifest {
    /// Parse a manifest from a string.
    pub fn parse(source: &str) -> SuiteResult<Self> {
        let manifest: Self = serde_json::from_str(source)
            .map_err(|e| SuiteError::manifest("<inline>", e.to_string()))?;
        manifest
            .validate()
            .map_err(|message| SuiteError::manifest("<inline>", message))?;
        Ok(manifest)
    }

    /// Load and parse a manifest file from disk.
    pub fn load(path: &Path) -> SuiteResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| SuiteError::file_read(path, e))?;
        Self::parse(&source).map_err(|e| match e {
            SuiteError::Manifest { message, .. } => SuiteError::manifest(path, message),
            other => other,
        })
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("suite name is empty".to_string());
        }
        if self.checks.is_empty() {
            return Err(format!("suite '{}' declares no checks", self.name));
        }

        let mut seen = HashSet::new();
        for entry in &self.checks {
            if entry.name.trim().is_empty() {
                return Err(format!(
                    "a check on '{}' has an empty name",
                    entry.artifact.display()
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(format!("check '{}' is declared more than once", entry.name));
            }
            entry.expectation()?;
        }
        Ok(())
    }
}
