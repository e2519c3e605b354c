use serde::{Deserialize, Serialize};

use crate::domain::value::Email;
use super::value_objects::{ResidenceInfo, UserContextId, UserId};

// ============================================================================
// User Aggregates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
}

/// Per-user living situation. `user_id` is a lookup reference to the owning
/// user, not an ownership relation; there is at most one context per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub id: UserContextId,
    pub user_id: UserId,
    pub residence: ResidenceInfo,
}
