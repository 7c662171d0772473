//! The pricing engine: a pure function from configuration state and
//! garment price rules to an itemized total.
//!
//! Money is carried as `rust_decimal::Decimal` at full precision; only
//! display rounds to two places, so summing many option deltas cannot
//! accumulate rounding drift.

pub mod compute;
pub mod rules;

pub use compute::{compute_price, PriceBreakdown, PricingError, SelectionDelta};
pub use rules::{MonogramFees, PriceRules};
