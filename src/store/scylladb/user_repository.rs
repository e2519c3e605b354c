use std::sync::Arc;

use async_trait::async_trait;
use scylla::client::session::Session;
use serde::de::DeserializeOwned;

use crate::domain::user::{User, UserContext, UserError, UserId, UserRepository};
use crate::domain::value::Email;

// ============================================================================
// ScyllaDB User Repository
// ============================================================================
//
// users:         id -> (email, payload), secondary index on email
// user_contexts: user_id -> payload
//
// Absence is reported as UserNotFound / ContextNotFound, same as the
// in-memory store.
//
// ============================================================================

pub struct ScyllaUserRepository {
    session: Arc<Session>,
}

impl ScyllaUserRepository {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    async fn first_payload(
        &self,
        query: &'static str,
        key: &str,
    ) -> Result<Option<String>, UserError> {
        let result = self
            .session
            .query_unpaged(query, (key,))
            .await
            .map_err(storage_error)?;

        let rows_result = result.into_rows_result().map_err(storage_error)?;
        let row = rows_result
            .maybe_first_row::<(String,)>()
            .map_err(storage_error)?;

        Ok(row.map(|(payload,)| payload))
    }
}

fn storage_error(e: impl std::fmt::Display) -> UserError {
    UserError::Storage(e.to_string())
}

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<String, UserError> {
    serde_json::to_string(value).map_err(storage_error)
}

pub(crate) fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, UserError> {
    serde_json::from_str(payload).map_err(storage_error)
}

#[async_trait]
impl UserRepository for ScyllaUserRepository {
    async fn save(&self, user: &User) -> Result<(), UserError> {
        let payload = encode(user)?;

        self.session
            .query_unpaged(
                "INSERT INTO users (id, email, payload) VALUES (?, ?, ?)",
                (user.id.as_str(), user.email.as_str(), payload),
            )
            .await
            .map_err(storage_error)?;

        tracing::info!(user_id = %user.id, "✅ Saved user to ScyllaDB");
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<User, UserError> {
        match self
            .first_payload("SELECT payload FROM users WHERE email = ?", email.as_str())
            .await?
        {
            Some(payload) => decode(&payload),
            None => Err(UserError::UserNotFound(email.to_string())),
        }
    }

    async fn get_user_context(&self, user_id: &UserId) -> Result<UserContext, UserError> {
        match self
            .first_payload(
                "SELECT payload FROM user_contexts WHERE user_id = ?",
                user_id.as_str(),
            )
            .await?
        {
            Some(payload) => decode(&payload),
            None => Err(UserError::ContextNotFound(user_id.to_string())),
        }
    }

    async fn save_user_context(&self, context: &UserContext) -> Result<(), UserError> {
        let payload = encode(context)?;

        self.session
            .query_unpaged(
                "INSERT INTO user_contexts (user_id, payload) VALUES (?, ?)",
                (context.user_id.as_str(), payload),
            )
            .await
            .map_err(storage_error)?;

        tracing::info!(
            user_id = %context.user_id,
            context_id = %context.id,
            "✅ Saved user context to ScyllaDB"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::test_support::{sample_context, sample_user};

    #[test]
    fn test_user_payload_round_trip() {
        let user = sample_user("u-1", "alice@example.com");
        let decoded: User = decode(&encode(&user).unwrap()).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_context_payload_round_trip() {
        let context = sample_context("u-1");
        let decoded: UserContext = decode(&encode(&context).unwrap()).unwrap();
        assert_eq!(decoded, context);
    }

    #[test]
    fn test_payload_with_invalid_email_is_rejected() {
        let payload = r#"{"id":"u-1","email":"nope","name":"x"}"#;
        assert!(matches!(decode::<User>(payload), Err(UserError::Storage(_))));
    }

    #[test]
    fn test_payload_with_empty_owner_is_rejected() {
        let context = sample_context("u-1");
        let payload = encode(&context)
            .unwrap()
            .replace("\"user_id\":\"u-1\"", "\"user_id\":\"\"");
        assert!(decode::<UserContext>(&payload).is_err());
    }
}
