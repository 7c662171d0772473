//! The five end-to-end pricing/projection scenarios, driven through the
//! fluent session builder.

use garment_types::{LiningType, MonogramKind};
use test_harness::oracle;
use test_harness::SessionBuilder;

type Result<T = ()> = std::result::Result<T, test_harness::HarnessError>;

#[test]
fn scenario_fabric_and_collar_standard_size() -> Result {
    // base 89.00 + navy twill 15.00 + spread collar 0.00 = 104.00
    SessionBuilder::jacket()
        .select("fabric", "navy-twill")?
        .select("collar", "spread")?
        .standard_size("40R", "slim")?
        .expect_price(10400)?;
    Ok(())
}

#[test]
fn scenario_custom_sizing_adds_surcharge() -> Result {
    // same as above plus the 25.00 custom measurement surcharge
    SessionBuilder::jacket()
        .select("fabric", "navy-twill")?
        .select("collar", "spread")?
        .custom_measurements(&[("chest", 102), ("waist", 88)])?
        .expect_price(12900)?;
    Ok(())
}

#[test]
fn scenario_quantity_multiplies_after_additive_terms() -> Result {
    SessionBuilder::jacket_with_base(5000)
        .quantity(3)?
        .expect_price(15000)?;
    Ok(())
}

#[test]
fn scenario_four_button_renders_double_breasted_grid() -> Result {
    let builder = SessionBuilder::jacket().button_layout("four-button")?;

    // Exactly six button parts at the 2x3 double-breasted offsets.
    let verdict = oracle::visible_count_with_prefix(builder.directives(), "button_", 6);
    assert!(verdict.passed, "{}", verdict.detail);

    let positions = &builder.directives().button_positions;
    assert_eq!(positions.len(), 6);
    let left = positions.iter().filter(|p| p.offset[0] < 0.0).count();
    let right = positions.iter().filter(|p| p.offset[0] > 0.0).count();
    assert_eq!((left, right), (3, 3));

    // All other button-configuration parts hidden.
    builder
        .expect_visible("config_four_button")?
        .expect_hidden("config_two_button")?
        .expect_hidden("config_three_button")?
        .expect_hidden("config_six_button")?;
    Ok(())
}

#[test]
fn scenario_no_monogram_position_gates_fee_and_part() -> Result {
    // Non-empty text with position no-monogram: no fee, no visible part.
    let builder = SessionBuilder::jacket()
        .monogram(MonogramKind::Initials, "AB", None)?
        .expect_price(8900)?;

    assert!(builder.directives().monogram.is_none());
    builder
        .expect_hidden("monogram_cuff")?
        .expect_hidden("monogram_chest")?;
    Ok(())
}

#[test]
fn lining_modifiers_apply_per_unit() -> Result {
    SessionBuilder::jacket()
        .lining(LiningType::Custom, Some("forest"))?
        .expect_price(8900 + 1500)?;

    SessionBuilder::jacket()
        .lining(LiningType::None, None)?
        .expect_price(8900 - 1000)?;
    Ok(())
}

#[test]
fn monogram_fee_applies_when_positioned() -> Result {
    SessionBuilder::jacket()
        .monogram(MonogramKind::Initials, "JDR", Some("cuff"))?
        .expect_price(8900 + 800)?
        .expect_visible("monogram_cuff")?
        .expect_hidden("monogram_chest")?;
    Ok(())
}

#[test]
fn undo_restores_previous_price_and_directives() -> Result {
    SessionBuilder::jacket()
        .select("fabric", "navy-twill")?
        .expect_price(10400)?
        .undo()?
        .expect_price(8900)?
        .redo()?
        .expect_price(10400)?;
    Ok(())
}
