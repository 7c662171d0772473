use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{MeasurementKey, ValueId};
use crate::visual::RgbHex;

/// How the garment is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SizeType {
    Standard,
    Custom,
}

/// How custom measurements were captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MeasurementMethod {
    Video,
    Sketch,
    Manual,
}

/// Sizing and measurement sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementState {
    pub size_type: SizeType,
    pub standard_size: Option<String>,
    pub fit_type: Option<String>,
    /// Populated only when `size_type` is Custom. BTreeMap keeps payload
    /// serialization order deterministic.
    pub custom_measurements: BTreeMap<MeasurementKey, Decimal>,
    pub method: MeasurementMethod,
}

impl Default for MeasurementState {
    fn default() -> Self {
        Self {
            size_type: SizeType::Standard,
            standard_size: None,
            fit_type: None,
            custom_measurements: BTreeMap::new(),
            method: MeasurementMethod::Manual,
        }
    }
}

/// What kind of monogram the product offers. Bounds the text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MonogramKind {
    Initials,
    FullName,
    Generic,
}

impl MonogramKind {
    pub fn max_len(self) -> usize {
        match self {
            MonogramKind::Initials => 3,
            MonogramKind::FullName => 15,
            MonogramKind::Generic => 4,
        }
    }
}

/// Where the monogram is embroidered. `NoMonogram` gates both the fee
/// and the rendered part, regardless of any text already entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MonogramPosition {
    NoMonogram,
    Position { id: ValueId },
}

/// Monogram sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonogramState {
    pub enabled: bool,
    pub kind: MonogramKind,
    /// Uppercase ASCII letters, length bounded by `kind`.
    pub text: String,
    pub position: MonogramPosition,
    pub font_id: String,
    pub thread_color: RgbHex,
}

impl Default for MonogramState {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: MonogramKind::Generic,
            text: String::new(),
            position: MonogramPosition::NoMonogram,
            font_id: "block".to_string(),
            thread_color: RgbHex::default_thread(),
        }
    }
}

/// Lining construction choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LiningType {
    Standard,
    Custom,
    None,
}

/// Lining sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiningState {
    pub lining_type: LiningType,
    /// Resolved against the lining-color category when set.
    pub color_id: Option<ValueId>,
}

impl Default for LiningState {
    fn default() -> Self {
        Self {
            lining_type: LiningType::Standard,
            color_id: None,
        }
    }
}

/// Button hardware sub-state. Ids resolve against the button-* categories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ButtonState {
    pub style_id: Option<ValueId>,
    pub color_id: Option<ValueId>,
    pub material_id: Option<ValueId>,
    /// Button count/layout (two-button, double-breasted, ...).
    pub layout_id: Option<ValueId>,
}
