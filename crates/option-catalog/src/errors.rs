use garment_types::{CategoryId, ValueId};

/// Errors from catalog lookup and loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown category: {id}")]
    UnknownCategory { id: CategoryId },

    #[error("unknown value {value} in category {category}")]
    UnknownValue {
        category: CategoryId,
        value: ValueId,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("unknown catalog format: {0}")]
    UnknownFormat(String),

    #[error("catalog version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("invalid catalog: {reason}")]
    Invalid { reason: String },

    #[error("catalog unavailable: {reason}")]
    Unavailable { reason: String },
}
