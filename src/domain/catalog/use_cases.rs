use std::sync::Arc;

use super::commands::CreateProduct;
use super::errors::CatalogError;
use super::product::Product;
use super::repository::ProductRepository;
use super::value_objects::ProductId;

// ============================================================================
// Product Use Cases
// ============================================================================
//
// Orchestrates: Handler input → business rules (id assignment, id
// validation) → ProductRepository
//
// ============================================================================

pub struct ProductUseCases {
    repository: Arc<dyn ProductRepository>,
}

impl ProductUseCases {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new product, assigning a fresh id when the caller gave none.
    /// Returns the stored record.
    pub async fn create_product(&self, command: CreateProduct) -> Result<Product, CatalogError> {
        let id = command.id.clone().unwrap_or_else(ProductId::generate);
        let product = command.into_product(id);

        self.repository.save(&product).await?;

        tracing::info!(
            product_id = %product.id,
            category = product.category.as_str(),
            "Product created"
        );

        Ok(product)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.repository.list().await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Looks up a product by its raw id. An empty id fails validation before
    /// the repository is touched.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let id = ProductId::new(id)?;
        self.repository.get_by_id(&id).await
    }

    /// Updates are not supported yet; the payload is never inspected.
    pub async fn update_product(&self) -> Result<Product, CatalogError> {
        Err(CatalogError::NotImplemented("update_product"))
    }

    pub async fn delete_product(&self, _id: &str) -> Result<(), CatalogError> {
        Err(CatalogError::NotImplemented("delete_product"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_support::sample_create_product;
    use crate::domain::value::ValidationError;
    use crate::store::InMemoryProductRepository;

    fn use_cases() -> ProductUseCases {
        ProductUseCases::new(Arc::new(InMemoryProductRepository::new()))
    }

    #[tokio::test]
    async fn test_create_product_generates_id_when_absent() {
        let use_cases = use_cases();

        let first = use_cases.create_product(sample_create_product()).await.unwrap();
        let second = use_cases.create_product(sample_create_product()).await.unwrap();

        assert!(!first.id.as_str().is_empty());
        assert!(!second.id.as_str().is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(use_cases.list_products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_product_keeps_supplied_id() {
        let use_cases = use_cases();
        let mut command = sample_create_product();
        command.id = Some(ProductId::new("vacuum-001").unwrap());

        let created = use_cases.create_product(command).await.unwrap();
        assert_eq!(created.id.as_str(), "vacuum-001");

        let fetched = use_cases.get_product("vacuum-001").await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_product_with_empty_id_fails_validation() {
        let use_cases = use_cases();

        let result = use_cases.get_product("").await;
        assert!(matches!(
            result,
            Err(CatalogError::Validation(ValidationError::EmptyIdentifier { .. }))
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_absent_not_error() {
        let use_cases = use_cases();
        let result = use_cases.get_product("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_products_empty_store() {
        let use_cases = use_cases();
        assert!(use_cases.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_are_not_implemented() {
        let use_cases = use_cases();
        let created = use_cases.create_product(sample_create_product()).await.unwrap();

        let update = use_cases.update_product().await;
        assert!(matches!(update, Err(CatalogError::NotImplemented("update_product"))));

        let delete = use_cases.delete_product(created.id.as_str()).await;
        assert!(matches!(delete, Err(CatalogError::NotImplemented("delete_product"))));

        // nothing changed
        assert_eq!(use_cases.get_product(created.id.as_str()).await.unwrap(), Some(created));
    }
}
