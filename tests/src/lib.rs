//! Shared helpers for the tripwire end-to-end tests.

use std::path::PathBuf;

pub use tripwire_core::{check_absent, check_invariant, CheckFailure};
pub use tripwire_suite::prelude::*;

/// Get the fixtures root directory.
///
/// This looks for `fixtures/` at the workspace root, next to this crate.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(workspace) => workspace.join("fixtures"),
        None => PathBuf::from("fixtures"),
    }
}

/// Path of a file under `fixtures/`.
pub fn fixture(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}
