//! Tripwire Core
//!
//! This crate provides the single-shot checks that guard generated artifacts:
//! - Fragments (non-empty literals expected in, or forbidden from, an artifact)
//! - Artifacts (text resources read once from disk)
//! - Invariants (a named fragment/artifact pair with an expectation)
//! - The check failure type shared by everything above
//!
//! # Example
//!
//! ```ignore
//! use tripwire_core::check_invariant;
//!
//! check_invariant("src/app/globals.css", "--background: #FF0000;")?;
//! ```

mod artifact;
mod check;
mod error;
mod fragment;

pub use artifact::Artifact;
pub use check::{check_absent, check_invariant, Expectation, Invariant};
pub use error::{CheckFailure, CheckResult};
pub use fragment::Fragment;
