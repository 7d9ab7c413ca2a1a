use serde::{Deserialize, Serialize};

use crate::domain::customer::Email;
use crate::domain::order::Order;

// ============================================================================
// Order Customer Email Changed
// ============================================================================

/// Fired once per applied reconciliation, after the order and its
/// addresses are saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomerEmailChanged {
    pub order: Order,
    pub new_customer_email: Email,
    pub old_customer_email: Email,
}

impl OrderCustomerEmailChanged {
    pub fn payload(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
