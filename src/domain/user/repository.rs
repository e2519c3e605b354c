use async_trait::async_trait;

use crate::domain::value::Email;
use super::errors::UserError;
use super::aggregate::{User, UserContext};
use super::value_objects::UserId;

// ============================================================================
// User Repository Contract
// ============================================================================
//
// Unlike ProductRepository, lookups here report absence as an error
// (`UserError::UserNotFound` / `UserError::ContextNotFound`).
//
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite the user stored under `user.id`
    async fn save(&self, user: &User) -> Result<(), UserError>;

    /// First user whose email is exactly `email`
    async fn get_by_email(&self, email: &Email) -> Result<User, UserError>;

    async fn get_user_context(&self, user_id: &UserId) -> Result<UserContext, UserError>;

    /// Insert or overwrite the context keyed by `context.user_id`
    async fn save_user_context(&self, context: &UserContext) -> Result<(), UserError>;
}
