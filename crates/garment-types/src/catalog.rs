use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, PartId, ValueId};
use crate::visual::{RenderEffects, Visual};

/// What a category's values describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CategoryKind {
    /// Values recolor a region of the garment (fabric, lining color, ...).
    Color,
    /// Values change surface material without geometry (weave, finish).
    Texture,
    /// Values toggle between mutually exclusive named parts (collar,
    /// cuff, pocket, vent, lapel, button layout, ...).
    Component,
    /// Free-form values with no direct render mapping (fit, size).
    Custom,
}

/// One selectable value within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: ValueId,
    pub name: String,
    /// Signed price contribution. Negative means discount.
    pub price_delta: Decimal,
    /// The value a fresh configuration implicitly shows.
    #[serde(default)]
    pub is_default: bool,
    /// A "none/skip" value: contributes no price and hides the whole
    /// part family for Component categories.
    #[serde(default)]
    pub is_none: bool,
    #[serde(default)]
    pub visual: Option<Visual>,
    #[serde(default)]
    pub render_effects: Option<RenderEffects>,
}

/// A customization axis and its selectable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    pub display_name: String,
    pub kind: CategoryKind,
    /// For Color categories: the part whose material a non-default
    /// selection overrides. Absent means the category inherits the
    /// primary fabric and contributes nothing on its own.
    #[serde(default)]
    pub region: Option<PartId>,
    pub values: Vec<OptionValue>,
}

impl CategoryDefinition {
    pub fn value(&self, id: &ValueId) -> Option<&OptionValue> {
        self.values.iter().find(|v| &v.id == id)
    }

    pub fn default_value(&self) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.is_default)
    }
}
