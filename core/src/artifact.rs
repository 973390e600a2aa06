//! Artifacts under verification.

use std::path::{Path, PathBuf};

use crate::error::{CheckFailure, CheckResult};
use crate::fragment::Fragment;

/// A text resource produced by some external build step.
///
/// The content is read once, in full, at construction time. An artifact is
/// never written back.
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    /// Read the artifact at `path`.
    ///
    /// Missing files, permission errors and non-UTF-8 content all surface as
    /// [`CheckFailure::ResourceUnavailable`].
    pub fn read(path: impl AsRef<Path>) -> CheckResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CheckFailure::resource_unavailable(path, e))?;
        tracing::trace!(path = %path.display(), bytes = content.len(), "read artifact");
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Build an artifact from content already in memory.
    pub fn from_source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn contains(&self, fragment: &Fragment) -> bool {
        fragment.occurs_in(&self.content)
    }
}
