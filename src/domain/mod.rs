// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// - customer:        customer record and email value object
// - order:           order record, addresses, status history
// - reconciliation:  deciding which customer an order email change belongs to
//
// Persistence and event delivery live outside this layer (see store/ and
// messaging/).
//
// ============================================================================

pub mod order;
pub mod customer;
pub mod reconciliation;
