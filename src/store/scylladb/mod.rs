// ============================================================================
// ScyllaDB Stores
// ============================================================================
//
// Persistent implementations of the repository contracts.
//
// ============================================================================

pub mod session;
pub mod product_repository;
pub mod user_repository;

pub use session::{connect, ensure_schema};
pub use product_repository::ScyllaProductRepository;
pub use user_repository::ScyllaUserRepository;
