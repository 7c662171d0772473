use config_state::ConfigurationState;
use pricing::PriceBreakdown;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metadata::OrderMetadata;

/// Order payload format identifier.
pub const ORDER_FORMAT: &str = "atelier-order";

/// Current order payload version.
pub const ORDER_VERSION: u32 = 1;

/// Price figures persisted with the order.
///
/// Display-rounded at the payload boundary: the payload is what the
/// customer was shown, not an intermediate computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedTotals {
    pub per_unit: Decimal,
    pub quantity: u32,
    pub total: Decimal,
}

impl PricedTotals {
    pub fn from_breakdown(breakdown: &PriceBreakdown) -> Self {
        Self {
            per_unit: breakdown.per_unit.round_dp(2),
            quantity: breakdown.quantity,
            total: breakdown.display_total(),
        }
    }
}

/// The top-level order payload structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Order metadata.
    pub order: OrderMetadata,
    /// The complete configuration snapshot.
    pub configuration: ConfigurationState,
    /// The price the configuration was quoted at.
    pub totals: PricedTotals,
}

impl OrderFile {
    pub fn new(
        metadata: OrderMetadata,
        configuration: ConfigurationState,
        breakdown: &PriceBreakdown,
    ) -> Self {
        Self {
            format: ORDER_FORMAT.to_string(),
            version: ORDER_VERSION,
            order: metadata,
            configuration,
            totals: PricedTotals::from_breakdown(breakdown),
        }
    }
}

/// Serialize an order payload to a pretty-printed JSON string.
pub fn save_order(order: &OrderFile) -> String {
    serde_json::to_string_pretty(order).expect("OrderFile serialization should never fail")
}
