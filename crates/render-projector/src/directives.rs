use std::collections::BTreeMap;

use garment_types::{MaterialAssignment, MaterialParams, PartId, RgbHex};
use serde::{Deserialize, Serialize};

/// Button hardware material. A namespace of its own, deliberately
/// separate from `part_material`: nothing the button path writes can
/// touch a fabric region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonMaterial {
    pub color: RgbHex,
    pub params: MaterialParams,
}

impl Default for ButtonMaterial {
    fn default() -> Self {
        Self {
            color: RgbHex::default_button(),
            params: MaterialParams::button_default(),
        }
    }
}

/// One rendered button: a named part at a 2D offset on the garment front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonPosition {
    pub part: PartId,
    pub offset: [f64; 2],
}

/// The single visible monogram, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonogramDirective {
    pub part: PartId,
    pub text: String,
    pub font_id: String,
    pub thread_color: RgbHex,
}

/// Renderer-facing output: derived from state on every change, never
/// stored or mutated directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderDirectives {
    pub part_visibility: BTreeMap<PartId, bool>,
    pub part_material: BTreeMap<PartId, MaterialAssignment>,
    pub button_material: Option<ButtonMaterial>,
    pub button_positions: Vec<ButtonPosition>,
    pub monogram: Option<MonogramDirective>,
}

impl RenderDirectives {
    pub fn is_visible(&self, part: &PartId) -> bool {
        self.part_visibility.get(part).copied().unwrap_or(false)
    }

    pub fn visible_parts(&self) -> impl Iterator<Item = &PartId> {
        self.part_visibility
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(part, _)| part)
    }
}

/// Projection result: the directives plus any tolerant-degradation
/// warnings accumulated along the way (unknown button layout, stale
/// value ids). Warnings are deterministic for a given state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub directives: RenderDirectives,
    pub warnings: Vec<String>,
}
