use config_state::ConfigurationState;
use garment_types::{CategoryId, LiningType, MonogramKind, MonogramPosition, SizeType, ValueId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::PriceRules;

/// One priced selection, retained for itemization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionDelta {
    pub category: CategoryId,
    pub value: ValueId,
    pub delta: Decimal,
}

/// The itemized result of a price computation.
///
/// `per_unit` is already clamped at zero; `total` is `per_unit` times
/// the quantity. Both carry full precision — round only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub selection_deltas: Vec<SelectionDelta>,
    pub measurement_surcharge: Decimal,
    /// Signed: positive for a custom-lining surcharge, negative for the
    /// no-lining discount, zero for standard lining.
    pub lining_modifier: Decimal,
    pub monogram_fee: Decimal,
    pub per_unit: Decimal,
    pub quantity: u32,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// The total rounded to two places for display.
    pub fn display_total(&self) -> Decimal {
        self.total.round_dp(2)
    }
}

/// Pricing failures. These indicate internal-consistency bugs, not user
/// input problems: the store guarantees only valid selections enter the
/// state, so pricing is total over well-formed configurations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("price invariant violated: computed total {computed} is negative")]
    InvariantViolated { computed: Decimal },
}

/// Compute the price of a configuration under the given rules.
///
/// Term order is fixed for debuggability (all terms are additive, so
/// order does not change the result): base price, per-selection deltas
/// snapshotted at selection time, measurement surcharge, lining
/// modifier, monogram fee. Quantity multiplication is the last step so
/// per-unit add-ons scale with quantity, and the per-unit subtotal is
/// clamped at zero so stacked discounts cannot drive the total negative.
#[instrument(skip_all, fields(quantity = state.quantity))]
pub fn compute_price(
    state: &ConfigurationState,
    rules: &PriceRules,
) -> Result<PriceBreakdown, PricingError> {
    let mut selection_deltas = Vec::with_capacity(state.selections.len());
    let mut delta_sum = Decimal::ZERO;
    for (category, selection) in &state.selections {
        delta_sum += selection.price_delta;
        selection_deltas.push(SelectionDelta {
            category: category.clone(),
            value: selection.value_id.clone(),
            delta: selection.price_delta,
        });
    }

    let measurement_surcharge = match state.measurements.size_type {
        SizeType::Custom => rules.custom_measurement_surcharge,
        SizeType::Standard => Decimal::ZERO,
    };

    let lining_modifier = match state.lining.lining_type {
        LiningType::Standard => Decimal::ZERO,
        LiningType::Custom => rules.custom_lining_surcharge,
        LiningType::None => -rules.no_lining_discount,
    };

    let monogram_fee = monogram_fee(state, rules);

    let raw_per_unit =
        rules.base_price + delta_sum + measurement_surcharge + lining_modifier + monogram_fee;
    let per_unit = raw_per_unit.max(Decimal::ZERO);

    let quantity = state.quantity;
    let total = per_unit * Decimal::from(quantity);

    if total < Decimal::ZERO {
        // Unreachable given the clamp above; treated as fatal if it ever fires.
        return Err(PricingError::InvariantViolated { computed: total });
    }

    debug!(%per_unit, %total, "price computed");

    Ok(PriceBreakdown {
        base_price: rules.base_price,
        selection_deltas,
        measurement_surcharge,
        lining_modifier,
        monogram_fee,
        per_unit,
        quantity,
        total,
    })
}

/// The monogram fee term. Position gates the fee: text alone, however
/// long, costs nothing while the position is `NoMonogram`.
fn monogram_fee(state: &ConfigurationState, rules: &PriceRules) -> Decimal {
    let mg = &state.monogram;
    if !mg.enabled {
        return Decimal::ZERO;
    }
    let position_id = match &mg.position {
        MonogramPosition::NoMonogram => return Decimal::ZERO,
        MonogramPosition::Position { id } => id,
    };

    if let Some(fee) = rules.monogram_fees.per_position.get(position_id) {
        return *fee;
    }
    match mg.kind {
        MonogramKind::Initials => rules.monogram_fees.initials,
        MonogramKind::FullName => rules.monogram_fees.full_name,
        MonogramKind::Generic => rules.monogram_fees.generic,
    }
}
