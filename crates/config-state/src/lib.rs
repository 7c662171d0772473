//! The configuration state store and step-completion evaluator.
//!
//! `ConfigurationState` is the single source of truth for a session.
//! Every operation is a pure transformation `(State, Input) -> State'`:
//! updates replace values wholesale rather than patching in place, which
//! keeps price/visual snapshots consistent, makes re-render triggers
//! unambiguous, and gives undo/redo for free as snapshot history.

pub mod history;
pub mod ops;
pub mod steps;
pub mod types;

pub use history::History;
pub use ops::{ButtonPatch, LiningPatch, MeasurementPatch, MonogramPatch};
pub use steps::{can_advance, is_step_complete, StepDefinition};
pub use types::{ConfigurationState, Selection, StateError};
