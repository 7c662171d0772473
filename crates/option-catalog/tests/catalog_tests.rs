use garment_types::{CategoryId, ValueId};
use option_catalog::{load_catalog, CatalogError, CatalogSource, OptionCatalog};

fn catalog_json(version: u32) -> String {
    format!(
        r##"{{
  "format": "atelier-catalog",
  "version": {version},
  "categories": [
    {{
      "id": "fabric",
      "display_name": "Fabric",
      "kind": {{ "type": "Color" }},
      "region": "fabric_primary",
      "values": [
        {{
          "id": "white",
          "name": "White",
          "price_delta": "0",
          "is_default": true,
          "visual": {{ "color": "#f5f5f0" }}
        }},
        {{ "id": "navy", "name": "Navy", "price_delta": "15.00", "visual": {{ "color": "#22304a" }} }}
      ]
    }},
    {{
      "id": "collar",
      "display_name": "Collar",
      "kind": {{ "type": "Component" }},
      "values": [
        {{ "id": "spread", "name": "Spread", "price_delta": "0", "is_default": true }},
        {{ "id": "cutaway", "name": "Cutaway", "price_delta": "4.00" }}
      ]
    }}
  ],
  "parts": [
    {{ "category": "collar", "value": "spread", "part": "collar_spread" }},
    {{ "category": "collar", "value": "cutaway", "part": "collar_cutaway" }}
  ]
}}"##
    )
}

#[test]
fn load_valid_catalog() {
    let catalog = load_catalog(&catalog_json(1)).unwrap();

    let fabric = catalog.get_category(&CategoryId::new("fabric")).unwrap();
    assert_eq!(fabric.values.len(), 2);

    let navy = catalog
        .get_value(&CategoryId::new("fabric"), &ValueId::new("navy"))
        .unwrap();
    assert_eq!(navy.price_delta.to_string(), "15.00");

    let part = catalog
        .part_table()
        .part_for(&CategoryId::new("collar"), &ValueId::new("spread"))
        .unwrap();
    assert_eq!(part.as_str(), "collar_spread");
}

#[test]
fn unknown_category_lookup_fails() {
    let catalog = load_catalog(&catalog_json(1)).unwrap();
    let result = catalog.get_category(&CategoryId::new("sleeves"));
    assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
}

#[test]
fn unknown_value_lookup_fails() {
    let catalog = load_catalog(&catalog_json(1)).unwrap();
    let result = catalog.get_value(&CategoryId::new("fabric"), &ValueId::new("tartan"));
    assert!(matches!(result, Err(CatalogError::UnknownValue { .. })));
}

#[test]
fn future_version_rejected() {
    let result = load_catalog(&catalog_json(99));
    assert!(matches!(
        result,
        Err(CatalogError::FutureVersion {
            file_version: 99,
            ..
        })
    ));
}

#[test]
fn wrong_format_identifier_rejected() {
    let json = catalog_json(1).replace("atelier-catalog", "something-else");
    assert!(matches!(
        load_catalog(&json),
        Err(CatalogError::UnknownFormat(_))
    ));
}

#[test]
fn component_value_without_part_entry_rejected() {
    // Drop the cutaway part entry: load must fail, not no-op at render.
    let json = catalog_json(1).replace(
        r#"{ "category": "collar", "value": "cutaway", "part": "collar_cutaway" }"#,
        r#"{ "category": "collar", "value": "spread", "part": "collar_spread" }"#,
    );
    assert!(matches!(load_catalog(&json), Err(CatalogError::Invalid { .. })));
}

#[test]
fn duplicate_value_id_rejected() {
    let json = catalog_json(1).replace(r#""id": "navy""#, r#""id": "white""#);
    assert!(matches!(load_catalog(&json), Err(CatalogError::Invalid { .. })));
}

#[test]
fn none_value_with_nonzero_delta_rejected() {
    let json = catalog_json(1).replace(
        r#""id": "cutaway", "name": "Cutaway", "price_delta": "4.00""#,
        r#""id": "cutaway", "name": "Cutaway", "price_delta": "4.00", "is_none": true"#,
    );
    assert!(matches!(load_catalog(&json), Err(CatalogError::Invalid { .. })));
}

#[test]
fn empty_catalog_misses_every_lookup() {
    let catalog = OptionCatalog::empty();
    assert!(catalog.is_empty());
    assert!(catalog.get_category(&CategoryId::new("fabric")).is_err());
}

#[test]
fn part_table_family_is_scoped_to_one_category() {
    let catalog = load_catalog(&catalog_json(1)).unwrap();
    let collar = CategoryId::new("collar");

    let family: Vec<_> = catalog.part_table().family(&collar).collect();
    assert_eq!(family.len(), 2);
    assert!(family
        .iter()
        .all(|(value, _)| *value == &ValueId::new("spread") || *value == &ValueId::new("cutaway")));

    let fabric = CategoryId::new("fabric");
    assert_eq!(catalog.part_table().family(&fabric).count(), 0);
}

#[test]
fn unavailable_source_reports_reason() {
    let source = option_catalog::source::UnavailableSource;
    let result = source.load("jacket-01");
    assert!(matches!(result, Err(CatalogError::Unavailable { .. })));
}
