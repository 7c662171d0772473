use config_state::{ButtonPatch, ConfigurationState, LiningPatch, MonogramPatch, Selection};
use garment_types::{
    CategoryDefinition, CategoryId, CategoryKind, LiningType, MonogramPosition, OptionValue,
    PartId, RenderEffects, RgbHex, ValueId, Visual,
};
use option_catalog::{OptionCatalog, PartTable, PartTableEntry};
use render_projector::{project, RenderDirectives, FABRIC_PRIMARY_PART, LINING_PART};
use rust_decimal::Decimal;

fn value(id: &str, default: bool) -> OptionValue {
    OptionValue {
        id: ValueId::new(id),
        name: id.to_string(),
        price_delta: Decimal::ZERO,
        is_default: default,
        is_none: false,
        visual: None,
        render_effects: None,
    }
}

fn colored(id: &str, default: bool, hex: &str) -> OptionValue {
    OptionValue {
        visual: Some(Visual {
            color: Some(RgbHex::parse(hex).unwrap()),
            material: None,
        }),
        ..value(id, default)
    }
}

fn part(category: &str, value: &str, part: &str) -> PartTableEntry {
    PartTableEntry {
        category: CategoryId::new(category),
        value: ValueId::new(value),
        part: PartId::new(part),
    }
}

fn test_catalog() -> OptionCatalog {
    let categories = vec![
        CategoryDefinition {
            id: CategoryId::new("fabric"),
            display_name: "Fabric".to_string(),
            kind: CategoryKind::Color,
            region: None,
            values: vec![
                colored("white", true, "#f5f5f0"),
                colored("navy-twill", false, "#22304a"),
            ],
        },
        CategoryDefinition {
            id: CategoryId::new("collar-color"),
            display_name: "Collar Color".to_string(),
            kind: CategoryKind::Color,
            region: Some(PartId::new("collar")),
            values: vec![value("inherit", true), colored("contrast-white", false, "#ffffff")],
        },
        CategoryDefinition {
            id: CategoryId::new("collar"),
            display_name: "Collar".to_string(),
            kind: CategoryKind::Component,
            region: None,
            values: vec![value("spread", true), value("cutaway", false)],
        },
        CategoryDefinition {
            id: CategoryId::new("pocket"),
            display_name: "Pocket".to_string(),
            kind: CategoryKind::Component,
            region: None,
            values: vec![
                value("flap", true),
                OptionValue {
                    is_none: true,
                    ..value("no-pocket", false)
                },
            ],
        },
        CategoryDefinition {
            id: CategoryId::new("vent"),
            display_name: "Vent".to_string(),
            kind: CategoryKind::Component,
            region: None,
            values: vec![
                value("single-vent", true),
                OptionValue {
                    render_effects: Some(RenderEffects {
                        show: vec![PartId::new("vent_seam_left"), PartId::new("vent_seam_right")],
                        hide: vec![PartId::new("back_panel_plain")],
                    }),
                    ..value("double-vent", false)
                },
            ],
        },
        CategoryDefinition {
            id: CategoryId::new("lining-color"),
            display_name: "Lining Color".to_string(),
            kind: CategoryKind::Color,
            region: Some(PartId::new(LINING_PART)),
            values: vec![colored("burgundy", true, "#6a1f2b")],
        },
        CategoryDefinition {
            id: CategoryId::new("button-color"),
            display_name: "Button Color".to_string(),
            kind: CategoryKind::Custom,
            region: None,
            values: vec![
                colored("horn-brown", true, "#3a2f23"),
                colored("mother-of-pearl", false, "#e8e4da"),
            ],
        },
        CategoryDefinition {
            id: CategoryId::new("button-layout"),
            display_name: "Button Layout".to_string(),
            kind: CategoryKind::Component,
            region: None,
            values: vec![value("two-button", true), value("four-button", false)],
        },
        CategoryDefinition {
            id: CategoryId::new("monogram-position"),
            display_name: "Monogram Position".to_string(),
            kind: CategoryKind::Custom,
            region: None,
            values: vec![value("cuff", false), value("chest", false)],
        },
    ];

    let parts = PartTable::new(vec![
        part("collar", "spread", "collar_spread"),
        part("collar", "cutaway", "collar_cutaway"),
        part("pocket", "flap", "pocket_flap"),
        part("vent", "single-vent", "vent_single"),
        part("vent", "double-vent", "vent_double"),
        part("button-layout", "two-button", "config_two_button"),
        part("button-layout", "four-button", "config_four_button"),
        part("monogram-position", "cuff", "monogram_cuff"),
        part("monogram-position", "chest", "monogram_chest"),
    ]);

    OptionCatalog::new(categories, parts)
}

fn directives(state: &ConfigurationState) -> RenderDirectives {
    project(state, &test_catalog()).directives
}

// ── Default garment ────────────────────────────────────────────────────

#[test]
fn empty_state_projects_the_default_garment() {
    let projection = project(&ConfigurationState::empty(), &test_catalog());
    let out = &projection.directives;

    let primary = &out.part_material[&PartId::new(FABRIC_PRIMARY_PART)];
    assert_eq!(primary.color, RgbHex::neutral());

    assert!(out.is_visible(&PartId::new("collar_spread")));
    assert!(!out.is_visible(&PartId::new("collar_cutaway")));
    assert!(out.is_visible(&PartId::new("pocket_flap")));
    assert!(out.is_visible(&PartId::new(LINING_PART)));

    assert_eq!(out.button_positions.len(), 2);
    assert!(out.monogram.is_none());
    assert!(projection.warnings.is_empty());
}

#[test]
fn projection_is_deterministic() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("fabric"), &ValueId::new("navy-twill"))
        .unwrap();
    assert_eq!(project(&state, &catalog), project(&state, &catalog));
}

// ── Materials and precedence ───────────────────────────────────────────

#[test]
fn fabric_selection_drives_primary_material() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("fabric"), &ValueId::new("navy-twill"))
        .unwrap();

    let out = directives(&state);
    let primary = &out.part_material[&PartId::new(FABRIC_PRIMARY_PART)];
    assert_eq!(primary.color, RgbHex::parse("#22304a").unwrap());
}

#[test]
fn default_region_selection_inherits_primary() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("collar-color"), &ValueId::new("inherit"))
        .unwrap();

    // An inheriting default contributes no override for its region.
    let out = directives(&state);
    assert!(!out.part_material.contains_key(&PartId::new("collar")));
}

#[test]
fn non_default_region_selection_overrides() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(
            &catalog,
            &CategoryId::new("collar-color"),
            &ValueId::new("contrast-white"),
        )
        .unwrap();

    let out = directives(&state);
    let collar = &out.part_material[&PartId::new("collar")];
    assert_eq!(collar.color, RgbHex::parse("#ffffff").unwrap());

    // The override never leaks onto the primary region.
    let primary = &out.part_material[&PartId::new(FABRIC_PRIMARY_PART)];
    assert_eq!(primary.color, RgbHex::neutral());
}

// ── Part families ──────────────────────────────────────────────────────

#[test]
fn selecting_a_family_member_hides_siblings() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("collar"), &ValueId::new("cutaway"))
        .unwrap();

    let out = directives(&state);
    assert!(out.is_visible(&PartId::new("collar_cutaway")));
    assert!(!out.is_visible(&PartId::new("collar_spread")));
}

#[test]
fn none_value_hides_the_whole_family() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("pocket"), &ValueId::new("no-pocket"))
        .unwrap();

    let out = directives(&state);
    assert!(!out.is_visible(&PartId::new("pocket_flap")));
}

#[test]
fn render_effects_apply_after_family_resolution() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .select(&catalog, &CategoryId::new("vent"), &ValueId::new("double-vent"))
        .unwrap();

    let out = directives(&state);
    assert!(out.is_visible(&PartId::new("vent_double")));
    assert!(out.is_visible(&PartId::new("vent_seam_left")));
    assert!(out.is_visible(&PartId::new("vent_seam_right")));
    assert!(!out.is_visible(&PartId::new("back_panel_plain")));
}

#[test]
fn stale_selection_degrades_with_a_warning() {
    let mut state = ConfigurationState::empty();
    // A snapshot whose value has since left the catalog.
    state.selections.insert(
        CategoryId::new("collar"),
        Selection {
            value_id: ValueId::new("wing"),
            price_delta: Decimal::ZERO,
            visual: None,
            is_default: false,
            is_none: false,
        },
    );

    let projection = project(&state, &test_catalog());
    assert_eq!(projection.warnings.len(), 1);
    assert!(projection.warnings[0].contains("wing"));
}

// ── Buttons ────────────────────────────────────────────────────────────

#[test]
fn four_button_layout_renders_the_double_breasted_grid() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .update_buttons(
            &catalog,
            ButtonPatch {
                layout_id: Some(ValueId::new("four-button")),
                ..ButtonPatch::default()
            },
        )
        .unwrap();

    let out = directives(&state);
    assert_eq!(out.button_positions.len(), 6);
    let left = out.button_positions.iter().filter(|p| p.offset[0] < 0.0).count();
    let right = out.button_positions.iter().filter(|p| p.offset[0] > 0.0).count();
    assert_eq!((left, right), (3, 3));

    for i in 1..=6 {
        assert!(out.is_visible(&PartId::new(format!("button_{i}"))));
    }
    assert!(out.is_visible(&PartId::new("config_four_button")));
    assert!(!out.is_visible(&PartId::new("config_two_button")));

    // The button_ prefix belongs to the positional parts alone: the
    // layout marker must not inflate the count past the six positions.
    let button_parts = out
        .visible_parts()
        .filter(|p| p.as_str().starts_with("button_"))
        .count();
    assert_eq!(button_parts, 6);
}

#[test]
fn unknown_layout_falls_back_to_two_button_with_warning() {
    let mut state = ConfigurationState::empty();
    // Bypasses store validation: a persisted state can carry a layout id
    // the current catalog no longer knows.
    state.buttons.layout_id = Some(ValueId::new("five-button"));

    let projection = project(&state, &test_catalog());
    assert_eq!(projection.directives.button_positions.len(), 2);
    assert!(projection
        .warnings
        .iter()
        .any(|w| w.contains("five-button")));
}

#[test]
fn button_color_writes_only_the_button_namespace() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .update_buttons(
            &catalog,
            ButtonPatch {
                color_id: Some(ValueId::new("mother-of-pearl")),
                ..ButtonPatch::default()
            },
        )
        .unwrap();

    let out = directives(&state);
    let material = out.button_material.as_ref().unwrap();
    assert_eq!(material.color, RgbHex::parse("#e8e4da").unwrap());

    let primary = &out.part_material[&PartId::new(FABRIC_PRIMARY_PART)];
    assert_eq!(primary.color, RgbHex::neutral());
}

// ── Lining ─────────────────────────────────────────────────────────────

#[test]
fn omitted_lining_hides_part_and_drops_material() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .update_lining(
            &catalog,
            LiningPatch {
                lining_type: Some(LiningType::None),
                color_id: None,
            },
        )
        .unwrap();

    let out = directives(&state);
    assert!(!out.is_visible(&PartId::new(LINING_PART)));
    assert!(!out.part_material.contains_key(&PartId::new(LINING_PART)));
}

#[test]
fn lining_color_resolves_from_the_catalog() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .update_lining(
            &catalog,
            LiningPatch {
                lining_type: Some(LiningType::Custom),
                color_id: Some(ValueId::new("burgundy")),
            },
        )
        .unwrap();

    let out = directives(&state);
    let lining = &out.part_material[&PartId::new(LINING_PART)];
    assert_eq!(lining.color, RgbHex::parse("#6a1f2b").unwrap());
}

// ── Monogram ───────────────────────────────────────────────────────────

#[test]
fn monogram_parts_hidden_until_enabled_and_positioned() {
    let catalog = test_catalog();
    let out = directives(&ConfigurationState::empty());
    assert!(!out.is_visible(&PartId::new("monogram_cuff")));
    assert!(!out.is_visible(&PartId::new("monogram_chest")));

    // Enabled but unpositioned still shows nothing.
    let state = ConfigurationState::empty()
        .update_monogram(
            &catalog,
            MonogramPatch {
                enabled: Some(true),
                text: Some("AB".to_string()),
                ..MonogramPatch::default()
            },
        )
        .unwrap();
    let out = directives(&state);
    assert!(out.monogram.is_none());
    assert!(!out.is_visible(&PartId::new("monogram_cuff")));
}

#[test]
fn positioned_monogram_shows_exactly_one_part() {
    let catalog = test_catalog();
    let state = ConfigurationState::empty()
        .update_monogram(
            &catalog,
            MonogramPatch {
                enabled: Some(true),
                text: Some("ab".to_string()),
                position: Some(MonogramPosition::Position {
                    id: ValueId::new("cuff"),
                }),
                ..MonogramPatch::default()
            },
        )
        .unwrap();

    let out = directives(&state);
    assert!(out.is_visible(&PartId::new("monogram_cuff")));
    assert!(!out.is_visible(&PartId::new("monogram_chest")));

    let directive = out.monogram.as_ref().unwrap();
    assert_eq!(directive.part, PartId::new("monogram_cuff"));
    assert_eq!(directive.text, "AB");
}

#[test]
fn unmapped_position_falls_back_to_a_synthesized_part() {
    let mut state = ConfigurationState::empty();
    state.monogram.enabled = true;
    state.monogram.position = MonogramPosition::Position {
        id: ValueId::new("collar-inside"),
    };

    let out = directives(&state);
    let directive = out.monogram.as_ref().unwrap();
    assert_eq!(directive.part, PartId::new("monogram_collar-inside"));
}
