// ============================================================================
// Validation Errors - raised by value object constructors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("price cannot be negative: {0}")]
    NegativePrice(i32),

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}
