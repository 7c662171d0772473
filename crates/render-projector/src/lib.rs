//! The render-directive projector: a pure, total function from
//! configuration state to the named-part visibility and material map the
//! 3D renderer consumes.
//!
//! Multiple categories can claim the same rendered attribute, so
//! precedence is explicit rather than accidental write order: the
//! primary fabric seeds the color map, per-region overrides apply only
//! for non-default selections, and button hardware lives in its own
//! namespace so a button color can never overwrite the garment fabric.

pub mod buttons;
pub mod directives;
pub mod project;

pub use buttons::{expand_layout, ButtonLayout, MAX_BUTTON_PARTS};
pub use directives::{
    ButtonMaterial, ButtonPosition, MonogramDirective, Projection, RenderDirectives,
};
pub use project::{project, FABRIC_PRIMARY_PART, LINING_PART};
