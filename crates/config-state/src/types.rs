use std::collections::BTreeMap;

use garment_types::{
    ButtonState, CategoryId, LiningState, MeasurementKey, MeasurementState, MonogramState,
    ValueId, Visual,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The chosen value for one category, snapshotted at selection time.
///
/// Price delta and visual attributes are captured from the catalog when
/// the selection is made, not re-looked-up later: a catalog change
/// mid-session cannot drift an existing selection's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub value_id: ValueId,
    pub price_delta: Decimal,
    #[serde(default)]
    pub visual: Option<Visual>,
    /// Whether the selected value is the category's default.
    #[serde(default)]
    pub is_default: bool,
    /// Whether the selected value is the category's "none/skip" value.
    #[serde(default)]
    pub is_none: bool,
}

/// The full configuration for one garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationState {
    /// One selection per category, at most. Replaced wholesale on select.
    pub selections: BTreeMap<CategoryId, Selection>,
    pub measurements: MeasurementState,
    pub monogram: MonogramState,
    pub lining: LiningState,
    pub buttons: ButtonState,
    /// Number of garments ordered. Always >= 1.
    pub quantity: u32,
}

impl ConfigurationState {
    /// The all-empty state created at configurator mount.
    pub fn empty() -> Self {
        Self {
            selections: BTreeMap::new(),
            measurements: MeasurementState::default(),
            monogram: MonogramState::default(),
            lining: LiningState::default(),
            buttons: ButtonState::default(),
            quantity: 1,
        }
    }

    pub fn selection(&self, category: &CategoryId) -> Option<&Selection> {
        self.selections.get(category)
    }
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Errors from state store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StateError {
    /// Catalog/state desync (unknown category or value). Never silently
    /// ignored; the caller surfaces a retry affordance.
    #[error("catalog lookup failed: {0}")]
    Catalog(#[from] option_catalog::CatalogError),

    #[error("invalid monogram: {reason}")]
    InvalidMonogram { reason: String },

    #[error("invalid measurement {key}: {reason}")]
    InvalidMeasurement {
        key: MeasurementKey,
        reason: String,
    },

    #[error("quantity must be at least 1")]
    InvalidQuantity,
}
