use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use scylla::client::session::Session;

use crate::domain::catalog::{CatalogError, Product, ProductId, ProductRepository};

// ============================================================================
// ScyllaDB Product Repository
// ============================================================================
//
// Products are stored as one JSON payload per row, keyed by id. Deserializing
// the payload runs the same validation as the value object constructors.
//
// ============================================================================

pub struct ScyllaProductRepository {
    session: Arc<Session>,
}

impl ScyllaProductRepository {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

fn storage_error(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Storage(e.to_string())
}

pub(crate) fn encode_product(product: &Product) -> Result<String, CatalogError> {
    serde_json::to_string(product).map_err(storage_error)
}

pub(crate) fn decode_product(payload: &str) -> Result<Product, CatalogError> {
    serde_json::from_str(payload).map_err(storage_error)
}

#[async_trait]
impl ProductRepository for ScyllaProductRepository {
    async fn save(&self, product: &Product) -> Result<(), CatalogError> {
        let payload = encode_product(product)?;

        self.session
            .query_unpaged(
                "INSERT INTO products (id, payload) VALUES (?, ?)",
                (product.id.as_str(), payload),
            )
            .await
            .map_err(storage_error)?;

        tracing::info!(product_id = %product.id, "✅ Saved product to ScyllaDB");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        // paged: the driver fetches the next page as the stream is drained
        let mut rows = self
            .session
            .query_iter("SELECT payload FROM products", ())
            .await
            .map_err(storage_error)?
            .rows_stream::<(String,)>()
            .map_err(storage_error)?;

        let mut products = Vec::new();
        while let Some((payload,)) = rows.try_next().await.map_err(storage_error)? {
            products.push(decode_product(&payload)?);
        }

        tracing::debug!(count = products.len(), "Loaded products from ScyllaDB");
        Ok(products)
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let result = self
            .session
            .query_unpaged("SELECT payload FROM products WHERE id = ?", (id.as_str(),))
            .await
            .map_err(storage_error)?;

        let rows_result = result.into_rows_result().map_err(storage_error)?;

        match rows_result.maybe_first_row::<(String,)>().map_err(storage_error)? {
            Some((payload,)) => decode_product(&payload).map(Some),
            None => Ok(None),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
//
// Queries need a live ScyllaDB node; only the payload codec is covered here.
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_support::sample_product;

    #[test]
    fn test_payload_round_trip() {
        let product = sample_product("p-1");
        let payload = encode_product(&product).unwrap();
        assert!(payload.contains("\"robot_vacuum\""));
        assert_eq!(decode_product(&payload).unwrap(), product);
    }

    #[test]
    fn test_corrupt_payload_is_storage_error() {
        let product = sample_product("p-1");
        let payload = encode_product(&product)
            .unwrap()
            .replace("\"amount\":89800", "\"amount\":-1");

        assert!(matches!(decode_product(&payload), Err(CatalogError::Storage(_))));
        assert!(matches!(decode_product("{"), Err(CatalogError::Storage(_))));
    }
}
