use config_state::{
    can_advance, is_step_complete, ButtonPatch, ConfigurationState, History, LiningPatch,
    MeasurementPatch, MonogramPatch, StateError, StepDefinition,
};
use garment_types::{CategoryId, ValueId};
use option_catalog::{CatalogSource, OptionCatalog};
use order_format::{save_order, OrderFile, OrderMetadata};
use pricing::{compute_price, PriceBreakdown, PriceRules, PricingError};
use render_projector::{project, Projection, RenderDirectives};
use tracing::{instrument, warn};

/// Session-level errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    /// Pricing invariant failure: an internal bug, never user-facing.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("customization unavailable")]
    Unavailable,
}

/// A single-owner configuration session.
///
/// Every mutation goes through [`Session::apply`]: price and render
/// directives are computed for the new state first, then state,
/// history, and derived values commit together. Derived values are
/// never stale when a caller reads them.
pub struct Session {
    catalog: OptionCatalog,
    state: ConfigurationState,
    history: History,
    steps: Vec<StepDefinition>,
    rules: PriceRules,
    price: PriceBreakdown,
    directives: RenderDirectives,
    warnings: Vec<String>,
    available: bool,
}

impl Session {
    /// Create a session over a loaded catalog.
    pub fn new(
        catalog: OptionCatalog,
        rules: PriceRules,
        steps: Vec<StepDefinition>,
    ) -> Result<Self, SessionError> {
        let state = ConfigurationState::empty();
        let price = compute_price(&state, &rules)?;
        let projection = project(&state, &catalog);
        Ok(Self {
            catalog,
            state,
            history: History::new(),
            steps,
            rules,
            price,
            directives: projection.directives,
            warnings: projection.warnings,
            available: true,
        })
    }

    /// Create a session from a catalog source, degrading to a read-only
    /// "customization unavailable" session if loading fails — never a
    /// partially populated configurator.
    #[instrument(skip(source, rules, steps))]
    pub fn from_source(
        source: &dyn CatalogSource,
        product_id: &str,
        rules: PriceRules,
        steps: Vec<StepDefinition>,
    ) -> Result<Self, SessionError> {
        match source.load(product_id) {
            Ok(catalog) => Self::new(catalog, rules, steps),
            Err(err) => {
                warn!(%product_id, error = %err, "catalog load failed, session degraded");
                let mut session = Self::new(OptionCatalog::empty(), rules, steps)?;
                session.available = false;
                Ok(session)
            }
        }
    }

    /// Whether customization is available (catalog loaded).
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn state(&self) -> &ConfigurationState {
        &self.state
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn price(&self) -> &PriceBreakdown {
        &self.price
    }

    pub fn directives(&self) -> &RenderDirectives {
        &self.directives
    }

    /// Warnings from the last projection (tolerant fallbacks taken).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    // ── Mutations ───────────────────────────────────────────────────────

    /// Select a value for a category.
    #[instrument(skip(self), fields(%category, %value))]
    pub fn select(&mut self, category: &CategoryId, value: &ValueId) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.select(&self.catalog, category, value)?;
        self.apply(next)
    }

    pub fn update_measurement(&mut self, patch: MeasurementPatch) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.update_measurement(patch)?;
        self.apply(next)
    }

    pub fn update_monogram(&mut self, patch: MonogramPatch) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.update_monogram(&self.catalog, patch)?;
        self.apply(next)
    }

    pub fn update_lining(&mut self, patch: LiningPatch) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.update_lining(&self.catalog, patch)?;
        self.apply(next)
    }

    pub fn update_buttons(&mut self, patch: ButtonPatch) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.update_buttons(&self.catalog, patch)?;
        self.apply(next)
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.with_quantity(quantity)?;
        self.apply(next)
    }

    /// Reset to the all-empty state (undoable).
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.guard_available()?;
        let next = self.state.reset();
        self.apply(next)
    }

    // ── History ─────────────────────────────────────────────────────────

    /// Step back one mutation. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, SessionError> {
        match self.history.undo(self.state.clone()) {
            Some(restored) => {
                let (price, projection) = self.derive(&restored)?;
                self.commit(restored, price, projection);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Step forward one undone mutation.
    pub fn redo(&mut self) -> Result<bool, SessionError> {
        match self.history.redo(self.state.clone()) {
            Some(restored) => {
                let (price, projection) = self.derive(&restored)?;
                self.commit(restored, price, projection);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ── Step gating ─────────────────────────────────────────────────────

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step_complete(&self, index: usize) -> bool {
        self.steps
            .get(index)
            .map(|step| is_step_complete(&self.state, step))
            .unwrap_or(false)
    }

    pub fn can_advance(&self, current_step: usize) -> bool {
        can_advance(current_step, &self.state, &self.steps)
    }

    // ── Checkout ────────────────────────────────────────────────────────

    /// Assemble the order payload for submission. The configuration
    /// snapshot and the quoted price travel together.
    pub fn checkout(&self, metadata: OrderMetadata) -> Result<OrderFile, SessionError> {
        self.guard_available()?;
        Ok(OrderFile::new(metadata, self.state.clone(), &self.price))
    }

    /// The checkout payload as JSON.
    pub fn checkout_json(&self, metadata: OrderMetadata) -> Result<String, SessionError> {
        Ok(save_order(&self.checkout(metadata)?))
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn guard_available(&self) -> Result<(), SessionError> {
        if self.available {
            Ok(())
        } else {
            Err(SessionError::Unavailable)
        }
    }

    /// Install a new state and its derived values.
    ///
    /// Price and directives are computed before anything is committed:
    /// a failing recomputation leaves state, history, and derived
    /// values exactly as they were.
    fn apply(&mut self, next: ConfigurationState) -> Result<(), SessionError> {
        let (price, projection) = self.derive(&next)?;
        self.history.push(self.state.clone());
        self.commit(next, price, projection);
        Ok(())
    }

    fn derive(
        &self,
        state: &ConfigurationState,
    ) -> Result<(PriceBreakdown, Projection), SessionError> {
        let price = compute_price(state, &self.rules)?;
        Ok((price, project(state, &self.catalog)))
    }

    fn commit(&mut self, state: ConfigurationState, price: PriceBreakdown, projection: Projection) {
        self.state = state;
        self.price = price;
        self.directives = projection.directives;
        self.warnings = projection.warnings;
    }
}
