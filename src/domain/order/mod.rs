// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderId, StoreId, OrderAddress, StatusHistoryComment)
// - Order record with customer rebinding helpers
//
// ============================================================================

pub mod value_objects;
pub mod entity;

pub use value_objects::*;
pub use entity::*;
