use std::collections::BTreeMap;

use garment_types::ValueId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tiered monogram fees, keyed by monogram kind with optional
/// per-position overrides from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonogramFees {
    pub initials: Decimal,
    pub full_name: Decimal,
    pub generic: Decimal,
    /// Position-specific fee overriding the kind tier when present.
    #[serde(default)]
    pub per_position: BTreeMap<ValueId, Decimal>,
}

impl Default for MonogramFees {
    fn default() -> Self {
        Self {
            initials: Decimal::new(800, 2),
            full_name: Decimal::new(1800, 2),
            generic: Decimal::new(1200, 2),
            per_position: BTreeMap::new(),
        }
    }
}

/// Per-garment pricing rules: the base price plus the conditional
/// surcharges and discounts the additive model applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRules {
    pub base_price: Decimal,
    /// Added once per unit when sizing is Custom.
    pub custom_measurement_surcharge: Decimal,
    /// Added once per unit when the lining is Custom.
    pub custom_lining_surcharge: Decimal,
    /// Subtracted once per unit when the lining is omitted.
    pub no_lining_discount: Decimal,
    pub monogram_fees: MonogramFees,
}

impl PriceRules {
    /// Rules with the standard surcharge schedule for a given base price.
    pub fn for_base(base_price: Decimal) -> Self {
        Self {
            base_price,
            custom_measurement_surcharge: Decimal::new(2500, 2),
            custom_lining_surcharge: Decimal::new(1500, 2),
            no_lining_discount: Decimal::new(1000, 2),
            monogram_fees: MonogramFees::default(),
        }
    }
}
