// ============================================================================
// Shared Value Objects
// ============================================================================
//
// Immutable, self-validating wrappers around primitives that are used by more
// than one aggregate (catalog and user). A value either passes validation or
// is never constructed.
//
// ============================================================================

pub mod email;
pub mod errors;
pub mod price;

pub use email::Email;
pub use errors::ValidationError;
pub use price::{Currency, Price};

/// Shared check behind every identifier constructor.
pub(crate) fn require_non_empty(
    field: &'static str,
    value: String,
) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyIdentifier { field });
    }
    Ok(value)
}
