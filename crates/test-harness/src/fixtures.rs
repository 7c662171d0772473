//! The demo made-to-measure jacket: catalog, part table, steps, and
//! price rules used across the scenario suites.

use config_state::StepDefinition;
use garment_types::{
    categories, CategoryDefinition, CategoryId, CategoryKind, MaterialParams, OptionValue, PartId,
    RgbHex, ValueId, Visual,
};
use option_catalog::{OptionCatalog, PartTable, PartTableEntry};
use pricing::PriceRules;
use rust_decimal::Decimal;

/// Money helper: whole cents to Decimal.
pub fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn color(hex: &str) -> Visual {
    Visual {
        color: Some(RgbHex::parse(hex).expect("fixture color is valid hex")),
        material: None,
    }
}

fn value(id: &str, name: &str, delta_cents: i64) -> OptionValue {
    OptionValue {
        id: ValueId::new(id),
        name: name.to_string(),
        price_delta: usd(delta_cents),
        is_default: false,
        is_none: false,
        visual: None,
        render_effects: None,
    }
}

fn default_value(id: &str, name: &str) -> OptionValue {
    OptionValue {
        is_default: true,
        ..value(id, name, 0)
    }
}

fn none_value(id: &str, name: &str) -> OptionValue {
    OptionValue {
        is_none: true,
        ..value(id, name, 0)
    }
}

fn category(id: &str, name: &str, kind: CategoryKind, values: Vec<OptionValue>) -> CategoryDefinition {
    CategoryDefinition {
        id: CategoryId::new(id),
        display_name: name.to_string(),
        kind,
        region: None,
        values,
    }
}

fn region_category(
    id: &str,
    name: &str,
    region: &str,
    values: Vec<OptionValue>,
) -> CategoryDefinition {
    CategoryDefinition {
        region: Some(PartId::new(region)),
        ..category(id, name, CategoryKind::Color, values)
    }
}

fn entry(category: &str, value: &str, part: &str) -> PartTableEntry {
    PartTableEntry {
        category: CategoryId::new(category),
        value: ValueId::new(value),
        part: PartId::new(part),
    }
}

/// Build the demo jacket catalog.
pub fn jacket_catalog() -> OptionCatalog {
    let categories = vec![
        // Primary fabric seeds the fabric_primary material region.
        region_category(
            categories::FABRIC,
            "Fabric",
            "fabric_primary",
            vec![
                OptionValue {
                    visual: Some(color("#f5f5f0")),
                    ..default_value("white-herringbone", "White Herringbone")
                },
                OptionValue {
                    visual: Some(color("#22304a")),
                    ..value("navy-twill", "Navy Twill", 1500)
                },
                OptionValue {
                    visual: Some(color("#3b3b3d")),
                    ..value("charcoal-flannel", "Charcoal Flannel", 2200)
                },
                OptionValue {
                    visual: Some(color("#ece7dd")),
                    ..value("plain-weave", "Plain Weave", -800)
                },
            ],
        ),
        // Region overrides: contribute only when non-default.
        region_category(
            "collar-color",
            "Collar Color",
            "collar",
            vec![
                default_value("inherit", "Match Fabric"),
                OptionValue {
                    visual: Some(color("#fafafa")),
                    ..value("contrast-white", "Contrast White", 500)
                },
            ],
        ),
        region_category(
            "cuff-color",
            "Cuff Color",
            "cuff",
            vec![
                default_value("inherit", "Match Fabric"),
                OptionValue {
                    visual: Some(color("#22304a")),
                    ..value("contrast-navy", "Contrast Navy", 500)
                },
            ],
        ),
        // Style families: mutually exclusive named parts.
        category(
            "collar",
            "Collar",
            CategoryKind::Component,
            vec![
                default_value("spread", "Spread"),
                value("button-down", "Button Down", 400),
                value("cutaway", "Cutaway", 400),
            ],
        ),
        category(
            "cuff",
            "Cuff",
            CategoryKind::Component,
            vec![
                default_value("barrel", "Barrel"),
                value("french", "French", 600),
            ],
        ),
        category(
            "pocket",
            "Pockets",
            CategoryKind::Component,
            vec![
                default_value("flap", "Flap"),
                value("patch", "Patch", 0),
                none_value("no-pocket", "No Pockets"),
            ],
        ),
        category(
            "vent",
            "Vent",
            CategoryKind::Component,
            vec![
                default_value("single", "Single Vent"),
                value("double", "Double Vent", 300),
                none_value("no-vent", "Ventless"),
            ],
        ),
        category(
            "lapel",
            "Lapel",
            CategoryKind::Component,
            vec![
                default_value("notch", "Notch"),
                value("peak", "Peak", 800),
            ],
        ),
        // Button hardware: its own namespace in the projector.
        category(
            categories::BUTTON_STYLE,
            "Button Style",
            CategoryKind::Custom,
            vec![
                default_value("classic-round", "Classic Round"),
                value("domed", "Domed", 200),
            ],
        ),
        category(
            categories::BUTTON_COLOR,
            "Button Color",
            CategoryKind::Custom,
            vec![
                OptionValue {
                    visual: Some(color("#3a2f23")),
                    ..default_value("horn-brown", "Horn Brown")
                },
                OptionValue {
                    visual: Some(color("#e8e4da")),
                    ..value("mother-of-pearl", "Mother of Pearl", 300)
                },
                OptionValue {
                    visual: Some(color("#1c2a44")),
                    ..value("navy", "Navy", 0)
                },
            ],
        ),
        category(
            categories::BUTTON_MATERIAL,
            "Button Material",
            CategoryKind::Custom,
            vec![
                OptionValue {
                    visual: Some(Visual {
                        color: None,
                        material: Some(MaterialParams::button_default()),
                    }),
                    ..default_value("horn", "Natural Horn")
                },
                OptionValue {
                    visual: Some(Visual {
                        color: None,
                        material: Some(MaterialParams {
                            roughness: 0.2,
                            metalness: 0.9,
                            opacity: 1.0,
                        }),
                    }),
                    ..value("brass", "Brass", 400)
                },
            ],
        ),
        category(
            categories::BUTTON_LAYOUT,
            "Button Configuration",
            CategoryKind::Component,
            vec![
                default_value("two-button", "Two Button"),
                value("three-button", "Three Button", 0),
                value("four-button", "Four Button Double Breasted", 600),
                value("six-button", "Six Button Double Breasted", 600),
            ],
        ),
        region_category(
            categories::LINING_COLOR,
            "Lining Color",
            "lining",
            vec![
                OptionValue {
                    visual: Some(color("#5e1f2f")),
                    ..default_value("burgundy", "Burgundy")
                },
                OptionValue {
                    visual: Some(color("#1f3d2e")),
                    ..value("forest", "Forest Green", 0)
                },
            ],
        ),
        category(
            categories::MONOGRAM_POSITION,
            "Monogram Position",
            CategoryKind::Custom,
            vec![value("cuff", "Inside Cuff", 0), value("chest", "Chest Pocket", 0)],
        ),
    ];

    let parts = PartTable::new(vec![
        entry("collar", "spread", "collar_spread"),
        entry("collar", "button-down", "collar_button_down"),
        entry("collar", "cutaway", "collar_cutaway"),
        entry("cuff", "barrel", "cuff_barrel"),
        entry("cuff", "french", "cuff_french"),
        entry("pocket", "flap", "pocket_flap"),
        entry("pocket", "patch", "pocket_patch"),
        entry("vent", "single", "vent_single"),
        entry("vent", "double", "vent_double"),
        entry("lapel", "notch", "lapel_notch"),
        entry("lapel", "peak", "lapel_peak"),
        // Layout marker parts live outside the button_ namespace: the
        // positional parts button_1..button_6 own that prefix alone.
        entry(categories::BUTTON_LAYOUT, "two-button", "config_two_button"),
        entry(categories::BUTTON_LAYOUT, "three-button", "config_three_button"),
        entry(categories::BUTTON_LAYOUT, "four-button", "config_four_button"),
        entry(categories::BUTTON_LAYOUT, "six-button", "config_six_button"),
        entry(categories::MONOGRAM_POSITION, "cuff", "monogram_cuff"),
        entry(categories::MONOGRAM_POSITION, "chest", "monogram_chest"),
    ]);

    OptionCatalog::new(categories, parts)
}

/// The configurator step sequence for the jacket.
pub fn jacket_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            id: "fabric".to_string(),
            display_name: "Fabric".to_string(),
            required_categories: vec![CategoryId::new(categories::FABRIC)],
            measurement_step: false,
            required_measurement_keys: Vec::new(),
        },
        StepDefinition {
            id: "style".to_string(),
            display_name: "Style".to_string(),
            required_categories: vec![
                CategoryId::new("collar"),
                CategoryId::new("cuff"),
                CategoryId::new("lapel"),
            ],
            measurement_step: false,
            required_measurement_keys: Vec::new(),
        },
        StepDefinition {
            id: "measurements".to_string(),
            display_name: "Measurements".to_string(),
            required_categories: Vec::new(),
            measurement_step: true,
            required_measurement_keys: ["chest", "waist", "sleeve", "shoulder"]
                .into_iter()
                .map(Into::into)
                .collect(),
        },
        StepDefinition {
            id: "buttons".to_string(),
            display_name: "Buttons".to_string(),
            required_categories: Vec::new(),
            measurement_step: false,
            required_measurement_keys: Vec::new(),
        },
        StepDefinition {
            id: "monogram".to_string(),
            display_name: "Monogram".to_string(),
            required_categories: Vec::new(),
            measurement_step: false,
            required_measurement_keys: Vec::new(),
        },
        StepDefinition {
            id: "lining".to_string(),
            display_name: "Lining".to_string(),
            required_categories: Vec::new(),
            measurement_step: false,
            required_measurement_keys: Vec::new(),
        },
    ]
}

/// Price rules for the jacket at a given base price (in cents).
pub fn jacket_rules(base_cents: i64) -> PriceRules {
    PriceRules::for_base(usd(base_cents))
}
