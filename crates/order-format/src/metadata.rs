use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order metadata stored alongside the configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetadata {
    /// Unique order identity, assigned at payload creation.
    pub order_id: Uuid,
    /// The product the catalog was loaded for.
    pub product_id: String,
    /// Customer-facing reference, if one exists yet.
    pub customer_reference: Option<String>,
    /// When the payload was assembled.
    pub created: DateTime<Utc>,
}

impl OrderMetadata {
    /// Create metadata for a product with a fresh order id.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            product_id: product_id.into(),
            customer_reference: None,
            created: Utc::now(),
        }
    }
}
