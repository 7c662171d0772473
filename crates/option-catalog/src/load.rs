use garment_types::{CategoryDefinition, CategoryKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::catalog::OptionCatalog;
use crate::errors::CatalogError;
use crate::part_table::PartTable;

/// Catalog file format identifier.
pub const CATALOG_FORMAT: &str = "atelier-catalog";

/// Current catalog format version.
pub const CATALOG_VERSION: u32 = 1;

/// The top-level catalog file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFileRaw {
    pub format: String,
    pub version: u32,
    pub categories: Vec<CategoryDefinition>,
    #[serde(default)]
    pub parts: PartTable,
}

/// Deserialize and validate a catalog from a JSON string.
///
/// Validates the format identifier and version, then runs structural
/// validation so authoring mistakes fail at load time rather than
/// degrading silently at render or pricing time.
#[instrument(skip(json), fields(len = json.len()))]
pub fn load_catalog(json: &str) -> Result<OptionCatalog, CatalogError> {
    let raw: CatalogFileRaw =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if raw.format != CATALOG_FORMAT {
        return Err(CatalogError::UnknownFormat(raw.format));
    }

    if raw.version > CATALOG_VERSION {
        return Err(CatalogError::FutureVersion {
            file_version: raw.version,
            supported_version: CATALOG_VERSION,
        });
    }

    validate(&raw.categories, &raw.parts)?;

    info!(
        categories = raw.categories.len(),
        parts = raw.parts.entries().len(),
        "catalog loaded"
    );

    Ok(OptionCatalog::new(raw.categories, raw.parts))
}

/// Structural catalog validation.
///
/// - value ids are unique within each category
/// - "none" values carry a zero price delta
/// - every non-none value of a Component category has a part table entry
/// - every part table entry references an existing category/value
pub fn validate(categories: &[CategoryDefinition], parts: &PartTable) -> Result<(), CatalogError> {
    for def in categories {
        for (i, value) in def.values.iter().enumerate() {
            if def.values[..i].iter().any(|v| v.id == value.id) {
                return Err(CatalogError::Invalid {
                    reason: format!(
                        "duplicate value id {} in category {}",
                        value.id, def.id
                    ),
                });
            }
            if value.is_none && value.price_delta != Decimal::ZERO {
                return Err(CatalogError::Invalid {
                    reason: format!(
                        "excluded value {} in category {} must have zero price delta",
                        value.id, def.id
                    ),
                });
            }
            if def.kind == CategoryKind::Component
                && !value.is_none
                && parts.part_for(&def.id, &value.id).is_none()
            {
                return Err(CatalogError::Invalid {
                    reason: format!(
                        "component value {} in category {} has no part table entry",
                        value.id, def.id
                    ),
                });
            }
        }
    }

    for entry in parts.entries() {
        let def = categories
            .iter()
            .find(|c| c.id == entry.category)
            .ok_or_else(|| CatalogError::Invalid {
                reason: format!("part table references unknown category {}", entry.category),
            })?;
        if def.value(&entry.value).is_none() {
            return Err(CatalogError::Invalid {
                reason: format!(
                    "part table references unknown value {} in category {}",
                    entry.value, entry.category
                ),
            });
        }
    }

    Ok(())
}
