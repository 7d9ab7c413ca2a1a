// ============================================================================
// Order Email Reconciliation
// ============================================================================
//
// Decides which customer account an order belongs to after an administrator
// changes its email, then applies that decision.
//
// - Request (ReconciliationRequest)
// - Errors (RejectionReason)
// - Pure decision procedure (decide)
// - Outcome (ReconciliationOutcome)
// - Event (OrderCustomerEmailChanged)
// - Reconciler (orchestration over the store ports)
// - Wire adapter (ChangeEmailForm, ReconciliationResponse, ChangeEmailHandler)
//
// ============================================================================

pub mod commands;
pub mod errors;
pub mod decision;
pub mod outcome;
pub mod events;
pub mod reconciler;
pub mod response;
pub mod handler;

pub use commands::*;
pub use errors::*;
pub use decision::*;
pub use outcome::*;
pub use events::*;
pub use reconciler::*;
pub use response::*;
pub use handler::*;
