use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::customer::Email;

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Storefront the order was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Uuid);

impl AddressId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    Billing,
    Shipping,
}

/// Address attached to an order; keeps its own copy of the contact email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub id: AddressId,
    pub address_type: AddressType,
    pub email: Email,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl OrderAddress {
    pub fn new(address_type: AddressType, email: Email) -> Self {
        Self {
            id: AddressId::new(),
            address_type,
            email,
            street: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }
}

/// Append-only entry in an order's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryComment {
    pub comment: String,
    pub is_customer_notified: bool,
    pub created_at: DateTime<Utc>,
}

impl StatusHistoryComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            is_customer_notified: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_address_carries_email() {
        let email = Email::parse("jane@example.com").unwrap();
        let address = OrderAddress::new(AddressType::Shipping, email.clone());

        assert_eq!(address.email, email);
        assert_eq!(address.address_type, AddressType::Shipping);
    }

    #[test]
    fn test_status_comment_defaults_to_not_notified() {
        let comment = StatusHistoryComment::new("note");
        assert_eq!(comment.comment, "note");
        assert!(!comment.is_customer_notified);
    }
}
