//! Test harness for scripting configurator workflows.
//!
//! Provides programmatic tools for driving multi-step customization
//! sessions, verifying price and render output at every step, and
//! generating diagnostic detail on failure.
//!
//! # Key Components
//!
//! - [`SessionBuilder`] — Fluent API for building and verifying sessions
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`fixtures`] — The demo jacket catalog, steps, and price rules

pub mod fixtures;
pub mod oracle;
pub mod workflow;

pub use fixtures::{jacket_catalog, jacket_rules, jacket_steps};
pub use oracle::OracleVerdict;
pub use workflow::{HarnessError, SessionBuilder};
