//! The configurator session: one user's configuration of one garment.
//!
//! Owns the current state, the undo history, and the catalog handle,
//! and recomputes price and render directives eagerly after every
//! mutation — each recomputation completes before the triggering call
//! returns, so the UI always reads consistent derived values.

pub mod session;

pub use session::{Session, SessionError};
