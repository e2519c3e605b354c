use serde::{Deserialize, Serialize};

use crate::domain::value::Price;
use super::value_objects::{InstallationDifficulty, ProductCategory, ProductId};

// ============================================================================
// Product Aggregate
// ============================================================================

/// A smart-home product in the catalog.
///
/// Plain domain struct: the wire representation lives in `rpc::messages`
/// and the storage representation is its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub manufacturer: String,
    pub purchase_link: String,
    pub image_url: String,
    /// Drawbacks and caveats to weigh before buying
    pub weak_points: Vec<String>,
    /// Selling points
    pub strong_points: Vec<String>,
    pub installation_difficulty: InstallationDifficulty,
    pub category: ProductCategory,
}
