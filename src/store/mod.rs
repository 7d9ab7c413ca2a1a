// ============================================================================
// Collaborator Ports
// ============================================================================
//
// The reconciler talks to persistence and identity only through these
// traits. Calls are ordinary blocking calls scoped to one request.
//
// memory/ - In-memory implementations for the demo binary and tests
//
// ============================================================================

mod memory;

use anyhow::Result;

use crate::domain::customer::{Customer, CustomerId, Email, WebsiteId};
use crate::domain::order::{Order, OrderAddress, OrderId, StoreId};

pub use memory::{InMemoryCustomerFactory, InMemoryCustomerStore, InMemoryOrderStore, StaticActor};

pub trait OrderStore: Send + Sync {
    fn get(&self, id: OrderId) -> Result<Option<Order>>;

    fn save(&self, order: &Order) -> Result<()>;

    /// Persist a single address belonging to `order_id`.
    fn save_address(&self, order_id: OrderId, address: &OrderAddress) -> Result<()>;
}

pub trait CustomerStore: Send + Sync {
    /// Customer emails are unique per website.
    fn find_by_email(&self, email: &Email, website_id: WebsiteId) -> Result<Option<Customer>>;

    fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;

    fn save(&self, customer: &Customer) -> Result<()>;
}

/// Provisions and persists a brand-new customer account for an order.
pub trait CustomerFactory: Send + Sync {
    fn create(&self, order_id: OrderId, store_id: StoreId, email: &Email) -> Result<Customer>;
}

/// The administrator performing the change, for audit comments.
pub trait CurrentActor: Send + Sync {
    fn display_name(&self) -> Result<String>;
}
