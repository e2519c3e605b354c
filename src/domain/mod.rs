// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// - value/   - value objects shared across aggregates (Email, Price)
// - catalog/ - products
// - user/    - users and their residence context
//
// Storage backends live in src/store/, wire handling in src/rpc/.
//
// ============================================================================

pub mod value;
pub mod catalog;
pub mod user;
