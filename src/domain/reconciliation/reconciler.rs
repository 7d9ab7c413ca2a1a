use std::sync::Arc;
use std::time::Instant;

use crate::config::DEFAULT_EVENT_NAME;
use crate::domain::customer::Email;
use crate::domain::order::{Order, OrderId};
use crate::messaging::EventSink;
use crate::metrics::Metrics;
use crate::store::{CustomerFactory, CustomerStore, OrderStore};

use super::commands::ReconciliationRequest;
use super::decision::{decide, Decision};
use super::errors::RejectionReason;
use super::events::OrderCustomerEmailChanged;
use super::outcome::ReconciliationOutcome;

// ============================================================================
// Order Email Reconciler
// ============================================================================
//
// Orchestrates: validate -> load order -> staleness guard -> decide ->
// mutate -> save order -> save addresses -> emit event
//
// Nothing is written until every rejection has been ruled out. Once the
// order is saved there is no rollback: a failing address save leaves the
// order updated and the remaining addresses untouched.
//
// ============================================================================

/// Checks that need no store access: an order id is present and the new
/// email is syntactically valid.
pub fn validate_request(request: &ReconciliationRequest) -> Result<(OrderId, Email), RejectionReason> {
    let order_id = request.order_id.ok_or(RejectionReason::InvalidOrderId)?;
    let new_email = Email::parse(&request.new_email).map_err(|e| {
        tracing::debug!(error = %e, "Rejected new email");
        RejectionReason::InvalidEmail
    })?;
    Ok((order_id, new_email))
}

pub fn audit_comment(old_email: &Email, new_email: &Email, actor_name: &str) -> String {
    format!("Order email address change from {old_email} to {new_email} by {actor_name}")
}

pub struct OrderEmailReconciler {
    orders: Arc<dyn OrderStore>,
    customers: Arc<dyn CustomerStore>,
    customer_factory: Arc<dyn CustomerFactory>,
    events: Arc<dyn EventSink>,
    metrics: Option<Arc<Metrics>>,
    event_name: String,
}

impl OrderEmailReconciler {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        customers: Arc<dyn CustomerStore>,
        customer_factory: Arc<dyn CustomerFactory>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            orders,
            customers,
            customer_factory,
            events,
            metrics: None,
            event_name: DEFAULT_EVENT_NAME.to_string(),
        }
    }

    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one reconciliation. Every failure comes back as
    /// `ReconciliationOutcome::Rejected`.
    pub fn reconcile(&self, request: &ReconciliationRequest, actor_name: &str) -> ReconciliationOutcome {
        let started = Instant::now();

        let outcome = match self.try_reconcile(request, actor_name) {
            Ok(outcome) => outcome,
            Err(reason) => ReconciliationOutcome::Rejected(reason),
        };

        match &outcome {
            ReconciliationOutcome::Applied { order, final_email, path } => {
                tracing::info!(
                    order_id = %order.id,
                    path = path.as_str(),
                    new_email = %final_email,
                    actor = %actor_name,
                    "Order email changed"
                );
            }
            ReconciliationOutcome::Rejected(RejectionReason::Failure(message)) => {
                tracing::error!(
                    order_id = ?request.order_id,
                    error = %message,
                    "Order email change failed"
                );
            }
            ReconciliationOutcome::Rejected(reason) => {
                tracing::warn!(
                    order_id = ?request.order_id,
                    reason = reason.code(),
                    "Order email change rejected"
                );
            }
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_outcome(outcome.label(), started.elapsed().as_secs_f64());
        }

        outcome
    }

    fn try_reconcile(
        &self,
        request: &ReconciliationRequest,
        actor_name: &str,
    ) -> Result<ReconciliationOutcome, RejectionReason> {
        let (order_id, new_email) = validate_request(request)?;

        let mut order = self
            .orders
            .get(order_id)?
            .ok_or(RejectionReason::OrderMismatch)?;
        if order.customer_email.as_str() != request.old_email {
            return Err(RejectionReason::OrderMismatch);
        }
        let old_email = order.customer_email.clone();
        if new_email == old_email {
            return Err(RejectionReason::NoOpEmail);
        }

        let customer_for_new_email = self.customers.find_by_email(&new_email, order.website_id)?;
        let decision = decide(&order, request, customer_for_new_email)?;
        let path = decision.path();

        tracing::debug!(
            order_id = %order.id,
            path = path.as_str(),
            has_customer = order.has_customer(),
            "Reconciliation path selected"
        );

        match decision {
            Decision::AssignExistingCustomer(customer) => {
                order.assign_customer(&customer);
            }
            Decision::RewriteLinkedCustomer(customer_id) => {
                let mut customer = self
                    .customers
                    .get_by_id(customer_id)?
                    .ok_or(RejectionReason::CustomerNotFound)?;
                customer.change_email(new_email.clone());
                self.customers.save(&customer)?;
                order.set_customer_email(new_email.clone());
            }
            Decision::ProvisionNewCustomer => {
                order.detach_customer();
                let customer = self
                    .customer_factory
                    .create(order.id, order.store_id, &new_email)?;
                order.assign_customer(&customer);
            }
        }

        order.add_status_history_comment(audit_comment(&old_email, &new_email, actor_name));
        self.orders.save(&order)?;

        let final_email = order.customer_email.clone();
        for address in order.addresses.iter_mut() {
            address.email = final_email.clone();
            self.orders.save_address(order.id, address)?;
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_address_updates(order.addresses.len());
        }

        self.emit_email_changed(&order, &final_email, &old_email);

        Ok(ReconciliationOutcome::Applied {
            order,
            final_email,
            path,
        })
    }

    fn emit_email_changed(&self, order: &Order, new_email: &Email, old_email: &Email) {
        let event = OrderCustomerEmailChanged {
            order: order.clone(),
            new_customer_email: new_email.clone(),
            old_customer_email: old_email.clone(),
        };

        match event.payload() {
            Ok(payload) => {
                self.events.emit(&self.event_name, payload);
                if let Some(metrics) = &self.metrics {
                    metrics.record_event(&self.event_name);
                }
            }
            Err(e) => {
                tracing::error!(
                    order_id = %order.id,
                    error = %e,
                    "Failed to serialize email change event"
                );
            }
        }
    }
}
