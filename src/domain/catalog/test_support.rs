use crate::domain::value::Price;
use super::commands::CreateProduct;
use super::product::Product;
use super::value_objects::{InstallationDifficulty, ProductCategory, ProductId};

pub(crate) fn sample_create_product() -> CreateProduct {
    CreateProduct {
        id: None,
        name: "Robot Vacuum S8".to_string(),
        description: "Self-emptying robot vacuum with mopping".to_string(),
        price: Price::new(89_800).unwrap(),
        manufacturer: "CleanBot".to_string(),
        purchase_link: "https://shop.example.com/s8".to_string(),
        image_url: "https://cdn.example.com/s8.png".to_string(),
        weak_points: vec!["Loud on max suction".to_string()],
        strong_points: vec!["Auto-empty dock".to_string(), "Lidar mapping".to_string()],
        installation_difficulty: InstallationDifficulty::Low,
        category: ProductCategory::RobotVacuum,
    }
}

pub(crate) fn sample_product(id: &str) -> Product {
    sample_create_product().into_product(ProductId::new(id).unwrap())
}
