use config_state::{ConfigurationState, Selection};
use garment_types::{CategoryId, SizeType, ValueId};
use order_format::{
    load_order, save_order, LoadError, OrderFile, OrderMetadata, OrderSubmitter,
};
use order_format::submit::AcceptingSubmitter;
use pricing::{compute_price, PriceRules};
use rust_decimal::Decimal;

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn sample_state() -> ConfigurationState {
    let mut state = ConfigurationState::empty();
    state.selections.insert(
        CategoryId::new("fabric"),
        Selection {
            value_id: ValueId::new("navy-twill"),
            price_delta: usd(1500),
            visual: None,
            is_default: false,
            is_none: false,
        },
    );
    state.measurements.size_type = SizeType::Custom;
    state.quantity = 2;
    state
}

fn sample_order() -> OrderFile {
    let state = sample_state();
    let breakdown = compute_price(&state, &PriceRules::for_base(usd(8900))).unwrap();
    OrderFile::new(OrderMetadata::new("classic-jacket"), state, &breakdown)
}

#[test]
fn save_then_load_round_trips() {
    let order = sample_order();
    let json = save_order(&order);
    let loaded = load_order(&json).unwrap();
    assert_eq!(loaded, order);
}

#[test]
fn payload_carries_format_and_version() {
    let json = save_order(&sample_order());
    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(raw["format"], "atelier-order");
    assert_eq!(raw["version"], 1);
}

#[test]
fn totals_are_display_rounded() {
    let state = sample_state();
    let mut rules = PriceRules::for_base(usd(8900));
    rules.base_price = Decimal::new(89005, 3); // 89.005 per the raw rule sheet
    let breakdown = compute_price(&state, &rules).unwrap();

    let order = OrderFile::new(OrderMetadata::new("classic-jacket"), state, &breakdown);
    assert_eq!(order.totals.per_unit, breakdown.per_unit.round_dp(2));
    assert_eq!(order.totals.total, breakdown.display_total());
    assert_eq!(order.totals.quantity, 2);
}

#[test]
fn unknown_format_rejected() {
    let mut raw: serde_json::Value = serde_json::from_str(&save_order(&sample_order())).unwrap();
    raw["format"] = "some-other-format".into();
    let result = load_order(&raw.to_string());
    assert!(matches!(result, Err(LoadError::UnknownFormat(f)) if f == "some-other-format"));
}

#[test]
fn missing_format_field_rejected() {
    let result = load_order(r#"{"version": 1}"#);
    assert!(matches!(result, Err(LoadError::UnknownFormat(_))));
}

#[test]
fn future_version_rejected() {
    let mut raw: serde_json::Value = serde_json::from_str(&save_order(&sample_order())).unwrap();
    raw["version"] = 99.into();
    let result = load_order(&raw.to_string());
    assert!(matches!(
        result,
        Err(LoadError::FutureVersion {
            file_version: 99,
            supported_version: 1,
        })
    ));
}

#[test]
fn unmigratable_old_version_fails() {
    let mut raw: serde_json::Value = serde_json::from_str(&save_order(&sample_order())).unwrap();
    raw["version"] = 0.into();
    let result = load_order(&raw.to_string());
    assert!(matches!(result, Err(LoadError::MigrationFailed { from: 0, to: 1, .. })));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(load_order("not json"), Err(LoadError::ParseError(_))));
}

#[test]
fn accepting_submitter_confirms() {
    let order = sample_order();
    let confirmation = AcceptingSubmitter.submit(&order).unwrap();
    let again = AcceptingSubmitter.submit(&order).unwrap();
    assert_ne!(confirmation.confirmation_id, again.confirmation_id);
}
