// ============================================================================
// User Domain
// ============================================================================
//
// - Value objects (UserId, UserContextId, ResidenceInfo, ...)
// - Aggregates (User, UserContext)
// - Commands (SignUp, SaveUserContext)
// - Errors (UserError)
// - Repository contract (UserRepository)
// - Use cases (AuthUseCases, UserContextUseCases)
//
// ============================================================================

pub mod value_objects;
pub mod aggregate;
pub mod commands;
pub mod errors;
pub mod repository;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use value_objects::*;
pub use aggregate::*;
pub use commands::*;
pub use errors::*;
pub use repository::*;
pub use use_cases::*;
