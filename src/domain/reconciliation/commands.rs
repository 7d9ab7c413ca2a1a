use serde::{Deserialize, Serialize};

use crate::domain::order::OrderId;

// ============================================================================
// Reconciliation Request
// ============================================================================

/// An administrator's request to change an order's customer email.
///
/// `new_email` is raw input and is validated by the reconciler. `old_email`
/// is the email the admin form was rendered with; it must still match the
/// stored order email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    pub order_id: Option<OrderId>,
    pub new_email: String,
    pub old_email: String,
    pub create_new_customer: bool,
    pub assign_to_another_customer: bool,
}

impl ReconciliationRequest {
    pub fn new(order_id: OrderId, new_email: impl Into<String>, old_email: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id),
            new_email: new_email.into(),
            old_email: old_email.into(),
            create_new_customer: false,
            assign_to_another_customer: false,
        }
    }

    pub fn create_new_customer(mut self, flag: bool) -> Self {
        self.create_new_customer = flag;
        self
    }

    pub fn assign_to_another_customer(mut self, flag: bool) -> Self {
        self.assign_to_another_customer = flag;
        self
    }
}
