//! Tripwire Suites
//!
//! Groups artifact invariants into named suites that run as one unit.
//!
//! # Structure
//!
//! - **Suite** - fluent builder over a table of invariants
//! - **Manifest** - the same table declared in a JSON file
//! - **Runner** - evaluates every invariant, never stopping at the first failure
//! - **Report** - per-invariant pass/fail outcomes
//!
//! # Example
//!
//! ```ignore
//! use tripwire_suite::prelude::*;
//!
//! pub fn suite() -> Suite {
//!     Suite::new("theme")
//!         .base_path("web")
//!         .contains("background_is_red", "src/app/globals.css", "--background: #FF0000;")
//!         .absent("no_next_button", "src/app/page.tsx", "Learn more about Next.js")
//! }
//!
//! #[test]
//! fn test() {
//!     suite().verify().unwrap();
//! }
//! ```

mod error;
mod manifest;
mod report;
mod runner;
mod suite;

pub use error::{SuiteError, SuiteResult};
pub use manifest::{CheckEntry, Manifest};
pub use report::{Outcome, Report};
pub use suite::Suite;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{SuiteError, SuiteResult};
    pub use crate::report::{Outcome, Report};
    pub use crate::suite::Suite;
    pub use tripwire_core::{CheckFailure, Expectation, Invariant};
}
