// ============================================================================
// Catalog Domain - Products
// ============================================================================
//
// - Value objects (ProductId, InstallationDifficulty, ProductCategory)
// - Product aggregate
// - Commands (CreateProduct)
// - Errors (CatalogError)
// - Repository contract (ProductRepository)
// - Use cases (ProductUseCases)
//
// ============================================================================

pub mod value_objects;
pub mod product;
pub mod commands;
pub mod errors;
pub mod repository;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use value_objects::*;
pub use product::*;
pub use commands::*;
pub use errors::*;
pub use repository::*;
pub use use_cases::*;
