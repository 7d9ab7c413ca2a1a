use serde::{Deserialize, Serialize};

use super::value_objects::{CustomerId, Email, GroupId, WebsiteId};

// ============================================================================
// Customer Record
// ============================================================================
//
// Customers are owned by the customer store. The reconciler borrows one for
// the duration of a request and hands it back for persistence.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: Email,
    pub group_id: GroupId,
    pub website_id: WebsiteId,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(email: Email, group_id: GroupId, website_id: WebsiteId) -> Self {
        Self {
            id: CustomerId::new(),
            email,
            group_id,
            website_id,
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Rewrite the account's login email in place
    pub fn change_email(&mut self, new_email: Email) {
        self.email = new_email;
    }
}
