use garment_types::{CategoryId, PartId, ValueId};
use serde::{Deserialize, Serialize};

/// One row of the part table: selecting `value` in `category` means the
/// named `part` is the visible member of that category's family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartTableEntry {
    pub category: CategoryId,
    pub value: ValueId,
    pub part: PartId,
}

/// Explicit `(CategoryId, ValueId) -> PartId` lookup table.
///
/// Replaces substring matching of part names against category/value
/// strings: a selection either has an authored part mapping or catalog
/// load fails, so a renamed part can never become a silent render no-op.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartTable {
    entries: Vec<PartTableEntry>,
}

impl PartTable {
    pub fn new(entries: Vec<PartTableEntry>) -> Self {
        Self { entries }
    }

    /// The part shown when `value` is selected in `category`.
    pub fn part_for(&self, category: &CategoryId, value: &ValueId) -> Option<&PartId> {
        self.entries
            .iter()
            .find(|e| &e.category == category && &e.value == value)
            .map(|e| &e.part)
    }

    /// All parts belonging to one category's mutually exclusive family.
    pub fn family<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = (&'a ValueId, &'a PartId)> + 'a {
        self.entries
            .iter()
            .filter(move |e| &e.category == category)
            .map(|e| (&e.value, &e.part))
    }

    pub fn entries(&self) -> &[PartTableEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
