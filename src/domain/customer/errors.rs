// ============================================================================
// Customer Value Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email is too long: {0} characters")]
    TooLong(usize),

    #[error("Email local part is too long: {0} characters")]
    LocalPartTooLong(usize),

    #[error("Invalid email format: {0}")]
    Malformed(String),
}
