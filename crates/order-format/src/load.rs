use serde_json::Value;

use crate::errors::LoadError;
use crate::save::{OrderFile, ORDER_FORMAT, ORDER_VERSION};

/// Deserialize an order payload from a JSON string.
///
/// Validates the format identifier and version, migrating older
/// payloads forward before final deserialization.
pub fn load_order(json: &str) -> Result<OrderFile, LoadError> {
    let raw: Value = serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    let format = raw
        .get("format")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if format != ORDER_FORMAT {
        return Err(LoadError::UnknownFormat(format.to_string()));
    }

    let version = raw.get("version").and_then(Value::as_u64).unwrap_or(0) as u32;
    if version > ORDER_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: version,
            supported_version: ORDER_VERSION,
        });
    }

    let migrated = if version < ORDER_VERSION {
        crate::migrate::migrate(raw, version, ORDER_VERSION)?
    } else {
        raw
    };

    serde_json::from_value(migrated).map_err(|e| LoadError::ParseError(e.to_string()))
}
