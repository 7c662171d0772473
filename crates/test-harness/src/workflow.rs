//! SessionBuilder — fluent API for scripting configurator workflows in
//! tests. All methods accept plain string ids for readability and
//! return rich assertion errors instead of panicking mid-scenario.

use config_state::{ButtonPatch, LiningPatch, MeasurementPatch, MonogramPatch};
use configurator::{Session, SessionError};
use garment_types::{
    CategoryId, LiningType, MonogramKind, MonogramPosition, PartId, SizeType, ValueId,
};
use pricing::PriceBreakdown;
use render_projector::RenderDirectives;
use rust_decimal::Decimal;

use crate::fixtures;

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

/// A fluent builder for driving and verifying a configurator session.
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    /// A session over the demo jacket catalog at an 89.00 base price.
    pub fn jacket() -> Self {
        Self::jacket_with_base(8900)
    }

    /// A session over the demo jacket catalog at a chosen base price.
    pub fn jacket_with_base(base_cents: i64) -> Self {
        let session = Session::new(
            fixtures::jacket_catalog(),
            fixtures::jacket_rules(base_cents),
            fixtures::jacket_steps(),
        )
        .expect("demo session always constructs");
        Self { session }
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn select(mut self, category: &str, value: &str) -> Result<Self, HarnessError> {
        self.session
            .select(&CategoryId::new(category), &ValueId::new(value))?;
        Ok(self)
    }

    pub fn standard_size(mut self, size: &str, fit: &str) -> Result<Self, HarnessError> {
        self.session.update_measurement(
            MeasurementPatch::default()
                .size_type(SizeType::Standard)
                .standard_size(size)
                .fit_type(fit),
        )?;
        Ok(self)
    }

    /// Switch to custom sizing and record measurements (in whole cm).
    pub fn custom_measurements(mut self, entries: &[(&str, i64)]) -> Result<Self, HarnessError> {
        let mut patch = MeasurementPatch::default().size_type(SizeType::Custom);
        for (key, cm) in entries {
            patch = patch.measurement(*key, Decimal::from(*cm));
        }
        self.session.update_measurement(patch)?;
        Ok(self)
    }

    pub fn monogram(
        mut self,
        kind: MonogramKind,
        text: &str,
        position_id: Option<&str>,
    ) -> Result<Self, HarnessError> {
        let position = match position_id {
            Some(id) => MonogramPosition::Position {
                id: ValueId::new(id),
            },
            None => MonogramPosition::NoMonogram,
        };
        self.session.update_monogram(MonogramPatch {
            enabled: Some(true),
            kind: Some(kind),
            text: Some(text.to_string()),
            position: Some(position),
            ..MonogramPatch::default()
        })?;
        Ok(self)
    }

    pub fn lining(
        mut self,
        lining_type: LiningType,
        color_id: Option<&str>,
    ) -> Result<Self, HarnessError> {
        self.session.update_lining(LiningPatch {
            lining_type: Some(lining_type),
            color_id: color_id.map(ValueId::new),
        })?;
        Ok(self)
    }

    pub fn buttons(mut self, patch: ButtonPatch) -> Result<Self, HarnessError> {
        self.session.update_buttons(patch)?;
        Ok(self)
    }

    pub fn button_layout(self, layout_id: &str) -> Result<Self, HarnessError> {
        self.buttons(ButtonPatch {
            layout_id: Some(ValueId::new(layout_id)),
            ..ButtonPatch::default()
        })
    }

    pub fn button_color(self, color_id: &str) -> Result<Self, HarnessError> {
        self.buttons(ButtonPatch {
            color_id: Some(ValueId::new(color_id)),
            ..ButtonPatch::default()
        })
    }

    pub fn quantity(mut self, quantity: u32) -> Result<Self, HarnessError> {
        self.session.set_quantity(quantity)?;
        Ok(self)
    }

    pub fn undo(mut self) -> Result<Self, HarnessError> {
        self.session.undo()?;
        Ok(self)
    }

    pub fn redo(mut self) -> Result<Self, HarnessError> {
        self.session.redo()?;
        Ok(self)
    }

    // ── Inline assertions ───────────────────────────────────────────────

    /// Assert the display total equals `expected_cents`.
    pub fn expect_price(self, expected_cents: i64) -> Result<Self, HarnessError> {
        let expected = Decimal::new(expected_cents, 2);
        let actual = self.session.price().display_total();
        if actual != expected {
            return Err(HarnessError::AssertionFailed {
                detail: format!("price: expected {}, got {}", expected, actual),
            });
        }
        Ok(self)
    }

    pub fn expect_visible(self, part: &str) -> Result<Self, HarnessError> {
        self.expect_visibility(part, true)
    }

    pub fn expect_hidden(self, part: &str) -> Result<Self, HarnessError> {
        self.expect_visibility(part, false)
    }

    fn expect_visibility(self, part: &str, expected: bool) -> Result<Self, HarnessError> {
        let actual = self.session.directives().is_visible(&PartId::new(part));
        if actual != expected {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "part {}: expected visible={}, got {} (visible parts: {:?})",
                    part,
                    expected,
                    actual,
                    self.session
                        .directives()
                        .visible_parts()
                        .collect::<Vec<_>>()
                ),
            });
        }
        Ok(self)
    }

    pub fn expect_step_complete(self, index: usize, expected: bool) -> Result<Self, HarnessError> {
        let actual = self.session.step_complete(index);
        if actual != expected {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "step {}: expected complete={}, got {}",
                    index, expected, actual
                ),
            });
        }
        Ok(self)
    }

    // ── Access ──────────────────────────────────────────────────────────

    pub fn price(&self) -> &PriceBreakdown {
        self.session.price()
    }

    pub fn directives(&self) -> &RenderDirectives {
        self.session.directives()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}
