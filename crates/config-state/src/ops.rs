use garment_types::categories;
use garment_types::{
    CategoryId, LiningType, MeasurementKey, MeasurementMethod, MonogramKind, MonogramPosition,
    RgbHex, SizeType, ValueId,
};
use option_catalog::OptionCatalog;
use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{ConfigurationState, Selection, StateError};

/// Partial update for the measurement sub-state.
#[derive(Debug, Clone, Default)]
pub struct MeasurementPatch {
    pub size_type: Option<SizeType>,
    pub standard_size: Option<String>,
    pub fit_type: Option<String>,
    pub method: Option<MeasurementMethod>,
    pub measurements: Vec<(MeasurementKey, Decimal)>,
}

impl MeasurementPatch {
    pub fn size_type(mut self, size_type: SizeType) -> Self {
        self.size_type = Some(size_type);
        self
    }

    pub fn standard_size(mut self, size: impl Into<String>) -> Self {
        self.standard_size = Some(size.into());
        self
    }

    pub fn fit_type(mut self, fit: impl Into<String>) -> Self {
        self.fit_type = Some(fit.into());
        self
    }

    pub fn method(mut self, method: MeasurementMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn measurement(mut self, key: impl Into<MeasurementKey>, value: Decimal) -> Self {
        self.measurements.push((key.into(), value));
        self
    }

    /// Legacy tolerant behavior: clamp negative measurement values to
    /// zero instead of rejecting them. The strict path in
    /// [`ConfigurationState::update_measurement`] is the default; this
    /// exists for callers migrating off coercing text-input handling.
    pub fn sanitize(mut self) -> Self {
        for (_, value) in &mut self.measurements {
            if *value < Decimal::ZERO {
                *value = Decimal::ZERO;
            }
        }
        self
    }
}

/// Partial update for the monogram sub-state.
#[derive(Debug, Clone, Default)]
pub struct MonogramPatch {
    pub enabled: Option<bool>,
    pub kind: Option<MonogramKind>,
    pub text: Option<String>,
    pub position: Option<MonogramPosition>,
    pub font_id: Option<String>,
    pub thread_color: Option<RgbHex>,
}

/// Partial update for the lining sub-state.
#[derive(Debug, Clone, Default)]
pub struct LiningPatch {
    pub lining_type: Option<LiningType>,
    pub color_id: Option<ValueId>,
}

/// Partial update for the button sub-state.
#[derive(Debug, Clone, Default)]
pub struct ButtonPatch {
    pub style_id: Option<ValueId>,
    pub color_id: Option<ValueId>,
    pub material_id: Option<ValueId>,
    pub layout_id: Option<ValueId>,
}

impl ConfigurationState {
    /// Replace the selection for `category` with `value`, wholesale.
    ///
    /// The price delta and visual attributes are snapshotted from the
    /// catalog here; partial patches of a `Selection` do not exist.
    pub fn select(
        &self,
        catalog: &OptionCatalog,
        category: &CategoryId,
        value: &ValueId,
    ) -> Result<Self, StateError> {
        let option = catalog.get_value(category, value)?;

        debug!(%category, %value, "selection replaced");

        let mut next = self.clone();
        next.selections.insert(
            category.clone(),
            Selection {
                value_id: option.id.clone(),
                price_delta: option.price_delta,
                visual: option.visual.clone(),
                is_default: option.is_default,
                is_none: option.is_none,
            },
        );
        Ok(next)
    }

    /// Remove the selection for `category`, if any.
    pub fn clear_selection(&self, category: &CategoryId) -> Self {
        let mut next = self.clone();
        next.selections.remove(category);
        next
    }

    /// Merge a measurement patch, rejecting invalid values.
    ///
    /// Negative measurement values return `InvalidMeasurement` rather
    /// than being coerced to zero; see [`MeasurementPatch::sanitize`]
    /// for the legacy coercing path.
    pub fn update_measurement(&self, patch: MeasurementPatch) -> Result<Self, StateError> {
        let mut next = self.clone();
        let m = &mut next.measurements;

        if let Some(size_type) = patch.size_type {
            m.size_type = size_type;
        }
        if let Some(size) = patch.standard_size {
            m.standard_size = Some(size);
        }
        if let Some(fit) = patch.fit_type {
            m.fit_type = Some(fit);
        }
        if let Some(method) = patch.method {
            m.method = method;
        }
        for (key, value) in patch.measurements {
            if value < Decimal::ZERO {
                return Err(StateError::InvalidMeasurement {
                    key,
                    reason: format!("negative value {}", value),
                });
            }
            m.custom_measurements.insert(key, value);
        }

        Ok(next)
    }

    /// Merge a monogram patch, enforcing length and charset invariants
    /// on the merged result.
    pub fn update_monogram(
        &self,
        catalog: &OptionCatalog,
        patch: MonogramPatch,
    ) -> Result<Self, StateError> {
        let mut next = self.clone();
        let mg = &mut next.monogram;

        if let Some(enabled) = patch.enabled {
            mg.enabled = enabled;
        }
        if let Some(kind) = patch.kind {
            mg.kind = kind;
        }
        if let Some(text) = patch.text {
            mg.text = text.to_ascii_uppercase();
        }
        if let Some(position) = patch.position {
            if let MonogramPosition::Position { id } = &position {
                catalog.get_value(&CategoryId::new(categories::MONOGRAM_POSITION), id)?;
            }
            mg.position = position;
        }
        if let Some(font_id) = patch.font_id {
            mg.font_id = font_id;
        }
        if let Some(color) = patch.thread_color {
            mg.thread_color = color;
        }

        if mg.text.len() > mg.kind.max_len() {
            return Err(StateError::InvalidMonogram {
                reason: format!(
                    "text {:?} exceeds {} characters",
                    mg.text,
                    mg.kind.max_len()
                ),
            });
        }
        if !mg.text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(StateError::InvalidMonogram {
                reason: format!("text {:?} contains non-letter characters", mg.text),
            });
        }

        Ok(next)
    }

    /// Merge a lining patch, validating the color id against the catalog.
    pub fn update_lining(
        &self,
        catalog: &OptionCatalog,
        patch: LiningPatch,
    ) -> Result<Self, StateError> {
        let mut next = self.clone();

        if let Some(lining_type) = patch.lining_type {
            next.lining.lining_type = lining_type;
        }
        if let Some(color_id) = patch.color_id {
            catalog.get_value(&CategoryId::new(categories::LINING_COLOR), &color_id)?;
            next.lining.color_id = Some(color_id);
        }

        Ok(next)
    }

    /// Merge a button patch, validating ids against the button categories.
    pub fn update_buttons(
        &self,
        catalog: &OptionCatalog,
        patch: ButtonPatch,
    ) -> Result<Self, StateError> {
        fn check(catalog: &OptionCatalog, category: &str, id: &ValueId) -> Result<(), StateError> {
            catalog.get_value(&CategoryId::new(category), id)?;
            Ok(())
        }

        let mut next = self.clone();
        if let Some(id) = patch.style_id {
            check(catalog, categories::BUTTON_STYLE, &id)?;
            next.buttons.style_id = Some(id);
        }
        if let Some(id) = patch.color_id {
            check(catalog, categories::BUTTON_COLOR, &id)?;
            next.buttons.color_id = Some(id);
        }
        if let Some(id) = patch.material_id {
            check(catalog, categories::BUTTON_MATERIAL, &id)?;
            next.buttons.material_id = Some(id);
        }
        if let Some(id) = patch.layout_id {
            check(catalog, categories::BUTTON_LAYOUT, &id)?;
            next.buttons.layout_id = Some(id);
        }

        Ok(next)
    }

    /// Set the order quantity. Must be at least 1.
    pub fn with_quantity(&self, quantity: u32) -> Result<Self, StateError> {
        if quantity == 0 {
            return Err(StateError::InvalidQuantity);
        }
        let mut next = self.clone();
        next.quantity = quantity;
        Ok(next)
    }

    /// Discard everything and return the all-empty state.
    pub fn reset(&self) -> Self {
        Self::empty()
    }
}
