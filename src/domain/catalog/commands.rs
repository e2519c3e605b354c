use crate::domain::value::Price;
use super::product::Product;
use super::value_objects::{InstallationDifficulty, ProductCategory, ProductId};

// ============================================================================
// Catalog Commands
// ============================================================================

/// Input for product creation. `id` is optional; one is generated when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub manufacturer: String,
    pub purchase_link: String,
    pub image_url: String,
    pub weak_points: Vec<String>,
    pub strong_points: Vec<String>,
    pub installation_difficulty: InstallationDifficulty,
    pub category: ProductCategory,
}

impl CreateProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            manufacturer: self.manufacturer,
            purchase_link: self.purchase_link,
            image_url: self.image_url,
            weak_points: self.weak_points,
            strong_points: self.strong_points,
            installation_difficulty: self.installation_difficulty,
            category: self.category,
        }
    }
}
