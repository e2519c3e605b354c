use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserContext, UserError, UserId, UserRepository};
use crate::domain::value::Email;

// ============================================================================
// In-Memory User Repository
// ============================================================================
//
// Two maps behind one lock: users keyed by id, contexts keyed by owning user
// id. There is no email index, so lookups by email scan every user; a real
// store should index the column instead.
//
// ============================================================================

#[derive(Default)]
struct UserTables {
    users: HashMap<UserId, User>,
    contexts: HashMap<UserId, UserContext>,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    tables: RwLock<UserTables>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), UserError> {
        self.tables
            .write()
            .await
            .users
            .insert(user.id.clone(), user.clone());

        tracing::debug!(user_id = %user.id, "Stored user in memory");
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<User, UserError> {
        let tables = self.tables.read().await;
        tables
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned()
            .ok_or_else(|| UserError::UserNotFound(email.to_string()))
    }

    async fn get_user_context(&self, user_id: &UserId) -> Result<UserContext, UserError> {
        let tables = self.tables.read().await;
        tables
            .contexts
            .get(user_id)
            .cloned()
            .ok_or_else(|| UserError::ContextNotFound(user_id.to_string()))
    }

    async fn save_user_context(&self, context: &UserContext) -> Result<(), UserError> {
        self.tables
            .write()
            .await
            .contexts
            .insert(context.user_id.clone(), context.clone());

        tracing::debug!(
            user_id = %context.user_id,
            context_id = %context.id,
            "Stored user context in memory"
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
