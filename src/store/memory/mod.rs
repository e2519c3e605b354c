// ============================================================================
// In-Memory Stores
// ============================================================================
//
// Ephemeral, single-process repositories. Used for local development and as
// the default backend.
//
// ============================================================================

pub mod product_repository;
pub mod user_repository;

pub use product_repository::InMemoryProductRepository;
pub use user_repository::InMemoryUserRepository;
