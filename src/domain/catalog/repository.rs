use async_trait::async_trait;

use super::errors::CatalogError;
use super::product::Product;
use super::value_objects::ProductId;

// ============================================================================
// Product Repository Contract
// ============================================================================
//
// Implemented by `store::InMemoryProductRepository` and
// `store::ScyllaProductRepository`. Use cases only ever see this trait.
//
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert or overwrite the product stored under `product.id`
    async fn save(&self, product: &Product) -> Result<(), CatalogError>;

    /// Every stored product, in no particular order
    async fn list(&self) -> Result<Vec<Product>, CatalogError>;

    /// `Ok(None)` when nothing is stored under `id`
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;
}
