use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;

use crate::utils::{retry_with_backoff, RetryConfig, RetryResult};

// ============================================================================
// ScyllaDB Session & Schema
// ============================================================================

pub const PRODUCTS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS products (id text PRIMARY KEY, payload text)";

pub const USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id text PRIMARY KEY, email text, payload text)";

// email lookups go through this index instead of scanning
pub const USERS_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS users_email_idx ON users (email)";

pub const USER_CONTEXTS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS user_contexts (user_id text PRIMARY KEY, payload text)";

fn create_keyspace_statement(keyspace: &str) -> String {
    format!(
        "CREATE KEYSPACE IF NOT EXISTS {keyspace} WITH REPLICATION = \
         {{'class': 'SimpleStrategy', 'replication_factor': 1}}"
    )
}

/// Connect to ScyllaDB, retrying while the node is still coming up.
pub async fn connect(uri: &str, retry: RetryConfig) -> anyhow::Result<Session> {
    tracing::info!(uri = %uri, "Connecting to ScyllaDB...");

    let result = retry_with_backoff(retry, |attempt| async move {
        tracing::debug!(attempt = attempt, "Opening ScyllaDB session");
        SessionBuilder::new().known_node(uri).build().await
    })
    .await;

    match result {
        RetryResult::Success(session) => Ok(session),
        RetryResult::Failed(e) => {
            anyhow::bail!("failed to connect to ScyllaDB at {}: {}", uri, e)
        }
    }
}

/// Create the keyspace and every table the repositories need. Idempotent.
pub async fn ensure_schema(session: &Session, keyspace: &str) -> anyhow::Result<()> {
    session
        .query_unpaged(create_keyspace_statement(keyspace), ())
        .await?;
    session.use_keyspace(keyspace, false).await?;

    for statement in [PRODUCTS_TABLE, USERS_TABLE, USERS_EMAIL_INDEX, USER_CONTEXTS_TABLE] {
        session.query_unpaged(statement, ()).await?;
    }

    tracing::info!(keyspace = %keyspace, "✅ ScyllaDB schema ready");
    Ok(())
}
