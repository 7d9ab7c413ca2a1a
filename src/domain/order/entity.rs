use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerId, Email, GroupId, WebsiteId};
use super::value_objects::{AddressType, OrderAddress, OrderId, StatusHistoryComment, StoreId};

// ============================================================================
// Order Record
// ============================================================================
//
// customer_id, customer_group_id and customer_is_guest move together: an
// order either points at a customer account or is a guest order.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub increment_id: String,
    pub store_id: StoreId,
    pub website_id: WebsiteId,
    pub customer_email: Email,
    pub customer_id: Option<CustomerId>,
    pub customer_group_id: GroupId,
    pub customer_is_guest: bool,
    pub status_history: Vec<StatusHistoryComment>,
    pub addresses: Vec<OrderAddress>,
}

impl Order {
    /// Order placed without an account
    pub fn guest(
        increment_id: impl Into<String>,
        store_id: StoreId,
        website_id: WebsiteId,
        customer_email: Email,
    ) -> Self {
        Self {
            id: OrderId::new(),
            increment_id: increment_id.into(),
            store_id,
            website_id,
            customer_email,
            customer_id: None,
            customer_group_id: GroupId::NOT_LOGGED_IN,
            customer_is_guest: true,
            status_history: Vec::new(),
            addresses: Vec::new(),
        }
    }

    /// Order placed by a signed-in customer
    pub fn for_customer(increment_id: impl Into<String>, store_id: StoreId, customer: &Customer) -> Self {
        let mut order = Self::guest(increment_id, store_id, customer.website_id, customer.email.clone());
        order.assign_customer(customer);
        order
    }

    /// Attach an address carrying the current order email.
    pub fn with_address(mut self, address_type: AddressType) -> Self {
        self.addresses
            .push(OrderAddress::new(address_type, self.customer_email.clone()));
        self
    }

    pub fn has_customer(&self) -> bool {
        self.customer_id.is_some()
    }

    /// Rebind the order to `customer`, replacing the whole customer reference.
    pub fn assign_customer(&mut self, customer: &Customer) {
        self.customer_email = customer.email.clone();
        self.customer_id = Some(customer.id);
        self.customer_group_id = customer.group_id;
        self.customer_is_guest = false;
    }

    /// Drop the link to the current customer account.
    pub fn detach_customer(&mut self) {
        self.customer_id = None;
    }

    pub fn set_customer_email(&mut self, email: Email) {
        self.customer_email = email;
    }

    pub fn add_status_history_comment(&mut self, comment: impl Into<String>) {
        self.status_history.push(StatusHistoryComment::new(comment));
    }
}
