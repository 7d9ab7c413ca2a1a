// ============================================================================
// Order Email Reconciliation
// ============================================================================
//
// Changes an order's customer email on behalf of an administrator and keeps
// the order, its customer account and its addresses consistent.
//
// Structure:
// - domain/     - Order and customer records, the reconciliation core
// - store/      - Persistence and identity ports, in-memory implementations
// - messaging/  - Notification event sinks
// - metrics/    - Prometheus metrics and scrape endpoint
// - config      - Application configuration
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod messaging;
pub mod metrics;
pub mod store;
