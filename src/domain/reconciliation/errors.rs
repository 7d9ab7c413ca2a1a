// ============================================================================
// Reconciliation Rejections
// ============================================================================
//
// Display strings are the admin-facing messages.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("Invalid order id.")]
    InvalidOrderId,

    #[error("Invalid Email address.")]
    InvalidEmail,

    #[error("Order not found or email mismatch.")]
    OrderMismatch,

    #[error("New email address is the same as the current one.")]
    NoOpEmail,

    #[error("Customer with this email already exists. Please check the checkbox to assign.")]
    CustomerEmailConflict,

    #[error("Customer linked to this order was not found.")]
    CustomerNotFound,

    /// A collaborator failed; carries its message.
    #[error("{0}")]
    Failure(String),
}

impl RejectionReason {
    /// Stable identifier for logs and metric labels
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidOrderId => "invalid_order_id",
            RejectionReason::InvalidEmail => "invalid_email",
            RejectionReason::OrderMismatch => "order_mismatch",
            RejectionReason::NoOpEmail => "no_op_email",
            RejectionReason::CustomerEmailConflict => "customer_email_conflict",
            RejectionReason::CustomerNotFound => "customer_not_found",
            RejectionReason::Failure(_) => "failure",
        }
    }
}

impl From<anyhow::Error> for RejectionReason {
    fn from(error: anyhow::Error) -> Self {
        RejectionReason::Failure(error.to_string())
    }
}
