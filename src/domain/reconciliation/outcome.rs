use crate::domain::customer::Email;
use crate::domain::order::Order;

use super::decision::ReconciliationPath;
use super::errors::RejectionReason;

#[derive(Debug, Clone, PartialEq)]
pub enum ReconciliationOutcome {
    Rejected(RejectionReason),
    Applied {
        order: Order,
        final_email: Email,
        path: ReconciliationPath,
    },
}

impl ReconciliationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReconciliationOutcome::Applied { .. })
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            ReconciliationOutcome::Rejected(reason) => Some(reason),
            ReconciliationOutcome::Applied { .. } => None,
        }
    }

    /// Metric label: the applied path or the rejection code.
    pub fn label(&self) -> &'static str {
        match self {
            ReconciliationOutcome::Rejected(reason) => reason.code(),
            ReconciliationOutcome::Applied { path, .. } => path.as_str(),
        }
    }
}
