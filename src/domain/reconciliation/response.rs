use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::OrderId;

use super::commands::ReconciliationRequest;
use super::errors::RejectionReason;
use super::outcome::ReconciliationOutcome;

// ============================================================================
// Admin Form Wire Format
// ============================================================================
//
// The admin form posts every field as a string. Flags are on only when the
// value is "1".
//
// ============================================================================

pub const SUCCESS_MESSAGE: &str = "Email address successfully changed.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeEmailForm {
    pub order_id: Option<String>,
    pub email: Option<String>,
    pub old_email: Option<String>,
    pub create_new_customer: Option<String>,
    pub assign_to_another_customer: Option<String>,
}

fn flag(value: Option<&str>) -> bool {
    value.map(str::trim) == Some("1")
}

impl ChangeEmailForm {
    pub fn into_request(self) -> ReconciliationRequest {
        let order_id = self
            .order_id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .map(OrderId);

        ReconciliationRequest {
            order_id,
            new_email: self.email.as_deref().map(str::trim).unwrap_or_default().to_string(),
            old_email: self.old_email.unwrap_or_default(),
            create_new_customer: flag(self.create_new_customer.as_deref()),
            assign_to_another_customer: flag(self.assign_to_another_customer.as_deref()),
        }
    }
}

/// Result rendered back to the admin form.
///
/// `ajax_expired` is part of the wire contract and is never set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResponse {
    pub error: bool,
    pub message: String,
    pub email: String,
    #[serde(rename = "ajaxExpired")]
    pub ajax_expired: bool,
}

impl ReconciliationResponse {
    pub fn rejected(reason: &RejectionReason) -> Self {
        Self {
            error: true,
            message: reason.to_string(),
            email: String::new(),
            ajax_expired: false,
        }
    }
}

impl From<&ReconciliationOutcome> for ReconciliationResponse {
    fn from(outcome: &ReconciliationOutcome) -> Self {
        match outcome {
            ReconciliationOutcome::Rejected(reason) => Self::rejected(reason),
            ReconciliationOutcome::Applied { final_email, .. } => Self {
                error: false,
                message: SUCCESS_MESSAGE.to_string(),
                email: final_email.to_string(),
                ajax_expired: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_coerces_wire_values() {
        let order_id = OrderId::new();
        let form: ChangeEmailForm = serde_json::from_value(json!({
            "order_id": order_id.to_string(),
            "email": "  new@example.com ",
            "old_email": "old@example.com",
            "create_new_customer": "1",
            "assign_to_another_customer": "0",
        }))
        .unwrap();

        let request = form.into_request();
        assert_eq!(request.order_id, Some(order_id));
        assert_eq!(request.new_email, "new@example.com");
        assert_eq!(request.old_email, "old@example.com");
        assert!(request.create_new_customer);
        assert!(!request.assign_to_another_customer);
    }

    #[test]
    fn test_form_missing_fields() {
        let request = ChangeEmailForm::default().into_request();
        assert_eq!(request.order_id, None);
        assert_eq!(request.new_email, "");
        assert_eq!(request.old_email, "");
        assert!(!request.create_new_customer);
        assert!(!request.assign_to_another_customer);
    }

    #[test]
    fn test_form_unparsable_order_id_is_absent() {
        let form = ChangeEmailForm {
            order_id: Some("12345".to_string()),
            ..Default::default()
        };
        assert_eq!(form.into_request().order_id, None);

        let form = ChangeEmailForm {
            order_id: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(form.into_request().order_id, None);
    }

    #[test]
    fn test_flag_accepts_only_one() {
        assert!(flag(Some("1")));
        assert!(flag(Some(" 1 ")));
        assert!(!flag(Some("true")));
        assert!(!flag(Some("0")));
        assert!(!flag(None));
    }

    #[test]
    fn test_rejected_response_shape() {
        let response = ReconciliationResponse::from(&ReconciliationOutcome::Rejected(
            RejectionReason::CustomerEmailConflict,
        ));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({
                "error": true,
                "message": "Customer with this email already exists. Please check the checkbox to assign.",
                "email": "",
                "ajaxExpired": false,
            })
        );
    }
}
