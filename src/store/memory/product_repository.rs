use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::{CatalogError, Product, ProductId, ProductRepository};

// ============================================================================
// In-Memory Product Repository
// ============================================================================
//
// Process-lifetime storage keyed by ProductId. Data is gone on restart.
//
// Concurrency: one store-wide RwLock. Readers share it, a writer excludes
// everyone, and no guard is held across an await of anything but the lock.
// Products are cloned in and out so callers never alias the stored copy.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> Result<(), CatalogError> {
        let previous = self
            .products
            .write()
            .await
            .insert(product.id.clone(), product.clone());

        tracing::debug!(
            product_id = %product.id,
            overwritten = previous.is_some(),
            "Stored product in memory"
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
