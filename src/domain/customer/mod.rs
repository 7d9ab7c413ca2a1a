// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (Email, CustomerId, GroupId, WebsiteId)
// - Errors (EmailError)
// - Customer record
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;

pub use value_objects::*;
pub use errors::*;
pub use entity::*;
