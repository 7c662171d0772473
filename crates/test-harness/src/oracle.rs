//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not
//! panics. This lets a scenario collect all failures in one pass.

use config_state::ConfigurationState;
use garment_types::PartId;
use option_catalog::OptionCatalog;
use pricing::PriceBreakdown;
use render_projector::{project, RenderDirectives, FABRIC_PRIMARY_PART};
use rust_decimal::Decimal;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
        }
    }
}

/// Check the display total equals an expected amount in cents.
pub fn price_total(breakdown: &PriceBreakdown, expected_cents: i64) -> OracleVerdict {
    let expected = Decimal::new(expected_cents, 2);
    let actual = breakdown.display_total();
    if actual == expected {
        OracleVerdict::pass("price_total", format!("total {}", actual))
    } else {
        OracleVerdict::fail(
            "price_total",
            format!("expected {}, got {}", expected, actual),
        )
    }
}

/// Check a part's visibility flag.
pub fn part_visible(directives: &RenderDirectives, part: &str, expected: bool) -> OracleVerdict {
    let actual = directives.is_visible(&PartId::new(part));
    if actual == expected {
        OracleVerdict::pass("part_visible", format!("{} visible={}", part, actual))
    } else {
        OracleVerdict::fail(
            "part_visible",
            format!("{}: expected visible={}, got {}", part, expected, actual),
        )
    }
}

/// Count visible parts whose id starts with `prefix`.
pub fn visible_count_with_prefix(
    directives: &RenderDirectives,
    prefix: &str,
    expected: usize,
) -> OracleVerdict {
    let actual = directives
        .visible_parts()
        .filter(|p| p.as_str().starts_with(prefix))
        .count();
    if actual == expected {
        OracleVerdict::pass(
            "visible_count_with_prefix",
            format!("{} parts match {}", actual, prefix),
        )
    } else {
        OracleVerdict::fail(
            "visible_count_with_prefix",
            format!("{}: expected {} visible, got {}", prefix, expected, actual),
        )
    }
}

/// Check that two projections assign the same primary fabric material.
///
/// Regression oracle for the color-collision bug class: button changes
/// must never reach `fabric_primary`.
pub fn fabric_primary_unchanged(
    before: &RenderDirectives,
    after: &RenderDirectives,
) -> OracleVerdict {
    let part = PartId::new(FABRIC_PRIMARY_PART);
    let a = before.part_material.get(&part);
    let b = after.part_material.get(&part);
    if a == b {
        OracleVerdict::pass("fabric_primary_unchanged", "assignment identical".to_string())
    } else {
        OracleVerdict::fail(
            "fabric_primary_unchanged",
            format!("before {:?}, after {:?}", a, b),
        )
    }
}

/// Check projection is idempotent: two calls on the same state produce
/// identical directives.
pub fn projection_idempotent(state: &ConfigurationState, catalog: &OptionCatalog) -> OracleVerdict {
    let first = project(state, catalog);
    let second = project(state, catalog);
    if first == second {
        OracleVerdict::pass("projection_idempotent", "projections identical".to_string())
    } else {
        OracleVerdict::fail(
            "projection_idempotent",
            "repeated projection differed".to_string(),
        )
    }
}
