use std::sync::Arc;

use crate::store::CurrentActor;

use super::errors::RejectionReason;
use super::reconciler::{validate_request, OrderEmailReconciler};
use super::response::{ChangeEmailForm, ReconciliationResponse};

// ============================================================================
// Change Email Request Handler
// ============================================================================
//
// Form -> request coercion, actor resolution, rendering. The reconciler
// never sees wire values or session state.
//
// ============================================================================

pub struct ChangeEmailHandler {
    reconciler: Arc<OrderEmailReconciler>,
    actor: Arc<dyn CurrentActor>,
}

impl ChangeEmailHandler {
    pub fn new(reconciler: Arc<OrderEmailReconciler>, actor: Arc<dyn CurrentActor>) -> Self {
        Self { reconciler, actor }
    }

    pub fn handle(&self, form: ChangeEmailForm) -> ReconciliationResponse {
        let request = form.into_request();

        // Malformed input is reported as such even without a session
        if let Err(reason) = validate_request(&request) {
            tracing::warn!(reason = reason.code(), "Order email change rejected");
            return ReconciliationResponse::rejected(&reason);
        }

        let actor_name = match self.actor.display_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, "Could not resolve acting administrator");
                return ReconciliationResponse::rejected(&RejectionReason::from(e));
            }
        };

        let outcome = self.reconciler.reconcile(&request, &actor_name);
        ReconciliationResponse::from(&outcome)
    }
}
