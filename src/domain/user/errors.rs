use crate::domain::value::ValidationError;

// ============================================================================
// User Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("user context not found for user {0}")]
    ContextNotFound(String),

    #[error("user storage failure: {0}")]
    Storage(String),
}

impl UserError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::UserNotFound(_) | UserError::ContextNotFound(_))
    }
}
