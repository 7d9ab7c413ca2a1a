use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, bail, Context, Result};

use crate::domain::customer::{Customer, CustomerId, Email, GroupId, WebsiteId};
use crate::domain::order::{Order, OrderAddress, OrderId, StoreId};
use super::{CurrentActor, CustomerFactory, CustomerStore, OrderStore};

// ============================================================================
// In-Memory Stores
// ============================================================================
//
// Save counters and a failure switch let callers observe exactly which
// persistence calls a reconciliation made.
//
// ============================================================================

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| anyhow!("{name} lock poisoned"))
}

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<OrderId, Order>>,
    saved_addresses: Mutex<Vec<OrderAddress>>,
    reads: AtomicUsize,
    order_saves: AtomicUsize,
    address_saves: AtomicUsize,
    fail_address_saves: AtomicBool,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an order without counting it as a save.
    pub fn insert(&self, order: Order) -> Result<()> {
        lock(&self.orders, "order store")?.insert(order.id, order);
        Ok(())
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn order_saves(&self) -> usize {
        self.order_saves.load(Ordering::SeqCst)
    }

    pub fn address_saves(&self) -> usize {
        self.address_saves.load(Ordering::SeqCst)
    }

    /// Every address passed to `save_address`, in call order.
    pub fn saved_addresses(&self) -> Result<Vec<OrderAddress>> {
        Ok(lock(&self.saved_addresses, "address log")?.clone())
    }

    pub fn set_fail_address_saves(&self, fail: bool) {
        self.fail_address_saves.store(fail, Ordering::SeqCst);
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, id: OrderId) -> Result<Option<Order>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(lock(&self.orders, "order store")?.get(&id).cloned())
    }

    fn save(&self, order: &Order) -> Result<()> {
        lock(&self.orders, "order store")?.insert(order.id, order.clone());
        self.order_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn save_address(&self, order_id: OrderId, address: &OrderAddress) -> Result<()> {
        if self.fail_address_saves.load(Ordering::SeqCst) {
            bail!("address storage unavailable");
        }

        let mut orders = lock(&self.orders, "order store")?;
        let order = orders
            .get_mut(&order_id)
            .with_context(|| format!("order {order_id} not found while saving address"))?;
        let stored = order
            .addresses
            .iter_mut()
            .find(|a| a.id == address.id)
            .with_context(|| format!("address {:?} does not belong to order {order_id}", address.id))?;
        *stored = address.clone();

        lock(&self.saved_addresses, "address log")?.push(address.clone());
        self.address_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCustomerStore {
    customers: Mutex<HashMap<CustomerId, Customer>>,
    lookups: AtomicUsize,
    customer_saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) -> Result<()> {
        lock(&self.customers, "customer store")?.insert(customer.id, customer);
        Ok(())
    }

    /// Forget a customer, leaving any orders that point at it dangling.
    pub fn remove(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(lock(&self.customers, "customer store")?.remove(&id))
    }

    /// Calls to `find_by_email` and `get_by_id`.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn customer_saves(&self) -> usize {
        self.customer_saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(lock(&self.customers, "customer store")?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn find_by_email(&self, email: &Email, website_id: WebsiteId) -> Result<Option<Customer>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(lock(&self.customers, "customer store")?
            .values()
            .find(|c| c.website_id == website_id && c.email.same_mailbox(email))
            .cloned())
    }

    fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(lock(&self.customers, "customer store")?.get(&id).cloned())
    }

    fn save(&self, customer: &Customer) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            bail!("customer storage unavailable");
        }

        let mut customers = lock(&self.customers, "customer store")?;
        let taken = customers.values().any(|c| {
            c.id != customer.id
                && c.website_id == customer.website_id
                && c.email.same_mailbox(&customer.email)
        });
        if taken {
            bail!(
                "A customer with the same email address already exists in website {}",
                customer.website_id.0
            );
        }

        customers.insert(customer.id, customer.clone());
        self.customer_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Creates accounts in an [`InMemoryCustomerStore`], resolving the website
/// from the order's store.
pub struct InMemoryCustomerFactory {
    customers: Arc<InMemoryCustomerStore>,
    store_websites: HashMap<StoreId, WebsiteId>,
    default_group: GroupId,
    created: AtomicUsize,
}

impl InMemoryCustomerFactory {
    pub fn new(customers: Arc<InMemoryCustomerStore>) -> Self {
        Self {
            customers,
            store_websites: HashMap::new(),
            default_group: GroupId::GENERAL,
            created: AtomicUsize::new(0),
        }
    }

    pub fn with_store(mut self, store_id: StoreId, website_id: WebsiteId) -> Self {
        self.store_websites.insert(store_id, website_id);
        self
    }

    pub fn with_default_group(mut self, group_id: GroupId) -> Self {
        self.default_group = group_id;
        self
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl CustomerFactory for InMemoryCustomerFactory {
    fn create(&self, order_id: OrderId, store_id: StoreId, email: &Email) -> Result<Customer> {
        let website_id = *self
            .store_websites
            .get(&store_id)
            .with_context(|| format!("store {} is not assigned to a website", store_id.0))?;

        let customer = Customer::new(email.clone(), self.default_group, website_id);
        self.customers.save(&customer)?;
        self.created.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            order_id = %order_id,
            customer_id = %customer.id,
            website_id = website_id.0,
            "Provisioned customer account for order"
        );
        Ok(customer)
    }
}

/// Actor with a fixed display name
#[derive(Debug, Clone)]
pub struct StaticActor(pub String);

impl StaticActor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl CurrentActor for StaticActor {
    fn display_name(&self) -> Result<String> {
        if self.0.trim().is_empty() {
            bail!("No administrator session");
        }
        Ok(self.0.clone())
    }
}
