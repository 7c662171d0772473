/// Errors during order payload loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse order payload: {0}")]
    ParseError(String),

    #[error("unknown order format: {0}")]
    UnknownFormat(String),

    #[error("payload version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}

/// Errors from the order submission boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    #[error("payment declined: {reason}")]
    PaymentDeclined { reason: String },

    #[error("order rejected: {reason}")]
    Rejected { reason: String },
}
