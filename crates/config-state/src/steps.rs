use garment_types::{CategoryId, MeasurementKey, SizeType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ConfigurationState;

/// One step of the configurator flow and what it requires.
///
/// The step sequence itself is a fixed ordered list owned by the caller;
/// this evaluator only answers completeness for a given definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub display_name: String,
    /// Categories that must hold a selection for the step to complete.
    #[serde(default)]
    pub required_categories: Vec<CategoryId>,
    /// This is the measurement step: sizing rules apply on top of the
    /// required categories.
    #[serde(default)]
    pub measurement_step: bool,
    /// Measurement keys required when `size_type` is Custom.
    #[serde(default)]
    pub required_measurement_keys: Vec<MeasurementKey>,
}

/// Whether a step is complete under the current state.
///
/// A step is complete iff every required category holds a selection,
/// and, for the measurement step, sizing is resolved: Standard needs
/// both a standard size and a fit type, Custom needs every required
/// measurement key present and strictly positive. Optional steps
/// (monogram, lining) list no required categories and complete via
/// their "none/skip" selections.
pub fn is_step_complete(state: &ConfigurationState, step: &StepDefinition) -> bool {
    for category in &step.required_categories {
        if state.selection(category).is_none() {
            return false;
        }
    }

    if step.measurement_step {
        let m = &state.measurements;
        match m.size_type {
            SizeType::Standard => {
                if m.standard_size.is_none() || m.fit_type.is_none() {
                    return false;
                }
            }
            SizeType::Custom => {
                for key in &step.required_measurement_keys {
                    match m.custom_measurements.get(key) {
                        Some(value) if *value > Decimal::ZERO => {}
                        _ => return false,
                    }
                }
            }
        }
    }

    true
}

/// Whether forward navigation from `current_step` is allowed.
///
/// Gates on the active step only; out-of-range indices never advance.
pub fn can_advance(
    current_step: usize,
    state: &ConfigurationState,
    steps: &[StepDefinition],
) -> bool {
    match steps.get(current_step) {
        Some(step) => is_step_complete(state, step),
        None => false,
    }
}
