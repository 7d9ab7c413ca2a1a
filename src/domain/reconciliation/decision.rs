use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerId};
use crate::domain::order::Order;

use super::commands::ReconciliationRequest;
use super::errors::RejectionReason;

// ============================================================================
// Reconciliation Decision
// ============================================================================
//
// Pure: looks at the loaded order, the request flags and whichever customer
// already owns the new email, and picks exactly one path. Rules are
// evaluated top to bottom, first match wins:
//
// 1. email owned by a customer, assign flag set     -> AssignExistingCustomer
// 2. email owned by a customer, assign flag clear   -> CustomerEmailConflict
// 3. email free, order linked, create flag clear    -> RewriteLinkedCustomer
// 4. email free, guest order or create flag set     -> ProvisionNewCustomer
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconciliationPath {
    AssignExistingCustomer,
    RewriteLinkedCustomer,
    ProvisionNewCustomer,
}

impl ReconciliationPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconciliationPath::AssignExistingCustomer => "assign_existing_customer",
            ReconciliationPath::RewriteLinkedCustomer => "rewrite_linked_customer",
            ReconciliationPath::ProvisionNewCustomer => "provision_new_customer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Rebind the order to the customer that already owns the new email.
    AssignExistingCustomer(Customer),
    /// Rewrite the linked customer's own email; the order keeps its link.
    RewriteLinkedCustomer(CustomerId),
    /// Detach the order and bind it to a freshly created account.
    ProvisionNewCustomer,
}

impl Decision {
    pub fn path(&self) -> ReconciliationPath {
        match self {
            Decision::AssignExistingCustomer(_) => ReconciliationPath::AssignExistingCustomer,
            Decision::RewriteLinkedCustomer(_) => ReconciliationPath::RewriteLinkedCustomer,
            Decision::ProvisionNewCustomer => ReconciliationPath::ProvisionNewCustomer,
        }
    }
}

pub fn decide(
    order: &Order,
    request: &ReconciliationRequest,
    customer_for_new_email: Option<Customer>,
) -> Result<Decision, RejectionReason> {
    // A case-variant of the linked customer's own email is not another owner
    let other_owner = customer_for_new_email.filter(|c| Some(c.id) != order.customer_id);

    if let Some(customer) = other_owner {
        return if request.assign_to_another_customer {
            Ok(Decision::AssignExistingCustomer(customer))
        } else {
            Err(RejectionReason::CustomerEmailConflict)
        };
    }

    match order.customer_id {
        Some(customer_id) if !request.create_new_customer => {
            Ok(Decision::RewriteLinkedCustomer(customer_id))
        }
        _ => Ok(Decision::ProvisionNewCustomer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Email, GroupId, WebsiteId};
    use crate::domain::order::StoreId;

    fn email(raw: &str) -> Email {
        Email::parse(raw).unwrap()
    }

    fn linked_order() -> (Order, Customer) {
        let customer = Customer::new(email("old@example.com"), GroupId::GENERAL, WebsiteId(1));
        (Order::for_customer("1", StoreId(1), &customer), customer)
    }

    fn guest_order() -> Order {
        Order::guest("2", StoreId(1), WebsiteId(1), email("old@example.com"))
    }

    fn other_customer() -> Customer {
        Customer::new(email("new@example.com"), GroupId(4), WebsiteId(1))
    }

    fn request(order: &Order) -> ReconciliationRequest {
        ReconciliationRequest::new(order.id, "new@example.com", "old@example.com")
    }

    #[test]
    fn test_existing_owner_with_assign_flag_rebinds() {
        let (order, _) = linked_order();
        let other = other_customer();
        let req = request(&order).assign_to_another_customer(true);

        let decision = decide(&order, &req, Some(other.clone())).unwrap();
        assert_eq!(decision, Decision::AssignExistingCustomer(other));
    }

    #[test]
    fn test_existing_owner_without_assign_flag_conflicts() {
        let order = guest_order();
        // create flag does not override the conflict
        let req = request(&order).create_new_customer(true);

        let result = decide(&order, &req, Some(other_customer()));
        assert_eq!(result, Err(RejectionReason::CustomerEmailConflict));
    }

    #[test]
    fn test_linked_order_rewrites_customer() {
        let (order, customer) = linked_order();

        let decision = decide(&order, &request(&order), None).unwrap();
        assert_eq!(decision, Decision::RewriteLinkedCustomer(customer.id));
        assert_eq!(decision.path(), ReconciliationPath::RewriteLinkedCustomer);
    }

    #[test]
    fn test_linked_customer_owning_new_email_is_rewritten() {
        let (order, customer) = linked_order();
        let mut recased = customer.clone();
        recased.email = email("OLD@example.com");

        let decision = decide(&order, &request(&order), Some(recased)).unwrap();
        assert_eq!(decision, Decision::RewriteLinkedCustomer(customer.id));
    }

    #[test]
    fn test_linked_order_with_create_flag_provisions() {
        let (order, _) = linked_order();
        let req = request(&order).create_new_customer(true);

        assert_eq!(decide(&order, &req, None).unwrap(), Decision::ProvisionNewCustomer);
    }

    #[test]
    fn test_guest_order_provisions() {
        let order = guest_order();

        assert_eq!(decide(&order, &request(&order), None).unwrap(), Decision::ProvisionNewCustomer);

        // assign flag is irrelevant when nobody owns the email
        let req = request(&order).assign_to_another_customer(true);
        assert_eq!(decide(&order, &req, None).unwrap(), Decision::ProvisionNewCustomer);
    }
}
