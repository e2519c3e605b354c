use crate::domain::value::Email;
use super::aggregate::User;
use super::value_objects::{ResidenceInfo, UserContextId, UserId};

// ============================================================================
// User Domain Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SignUp {
    pub id: Option<UserId>,
    pub email: Email,
    pub name: String,
}

impl SignUp {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Context payload from the caller. The owning user id is not part of it:
/// the use case always takes it from the caller-supplied argument.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveUserContext {
    pub id: Option<UserContextId>,
    pub residence: ResidenceInfo,
}
