use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SubmitError;
use crate::save::OrderFile;

/// A confirmed order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub confirmation_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Boundary trait for order submission (payment, fulfillment).
///
/// Implementations own every payment and persistence concern; the core
/// only hands over the payload and interprets the verdict.
pub trait OrderSubmitter {
    fn submit(&self, order: &OrderFile) -> Result<OrderConfirmation, SubmitError>;
}

/// A submitter that accepts everything, for tests and demos.
pub struct AcceptingSubmitter;

impl OrderSubmitter for AcceptingSubmitter {
    fn submit(&self, _order: &OrderFile) -> Result<OrderConfirmation, SubmitError> {
        Ok(OrderConfirmation {
            confirmation_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        })
    }
}
