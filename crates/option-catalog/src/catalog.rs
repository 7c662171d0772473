use std::collections::BTreeMap;

use garment_types::{CategoryDefinition, CategoryId, OptionValue, ValueId};
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::part_table::PartTable;

/// The loaded option catalog for one product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionCatalog {
    categories: BTreeMap<CategoryId, CategoryDefinition>,
    part_table: PartTable,
}

impl OptionCatalog {
    pub fn new(categories: Vec<CategoryDefinition>, part_table: PartTable) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
            part_table,
        }
    }

    /// The degraded catalog used when loading fails: every lookup misses,
    /// so the configurator surfaces "customization unavailable" instead
    /// of a partially populated configurator.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get_category(&self, id: &CategoryId) -> Result<&CategoryDefinition, CatalogError> {
        self.categories
            .get(id)
            .ok_or_else(|| CatalogError::UnknownCategory { id: id.clone() })
    }

    pub fn get_value(
        &self,
        category: &CategoryId,
        value: &ValueId,
    ) -> Result<&OptionValue, CatalogError> {
        let def = self.get_category(category)?;
        def.value(value).ok_or_else(|| CatalogError::UnknownValue {
            category: category.clone(),
            value: value.clone(),
        })
    }

    /// Non-failing lookup for tolerant paths (projector fallbacks).
    pub fn find_value(&self, category: &CategoryId, value: &ValueId) -> Option<&OptionValue> {
        self.categories.get(category)?.value(value)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.values()
    }

    pub fn part_table(&self) -> &PartTable {
        &self.part_table
    }
}
