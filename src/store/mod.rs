// ============================================================================
// Store - Repository Implementations
// ============================================================================
//
// Concrete backends for the domain repository contracts:
// - memory/   - process-local, ephemeral (default)
// - scylladb/ - persistent, backed by ScyllaDB
//
// ============================================================================

pub mod memory;
pub mod scylladb;

pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
pub use scylladb::{ScyllaProductRepository, ScyllaUserRepository};
