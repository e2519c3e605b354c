use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value::{require_non_empty, ValidationError};

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// Product identifier. A dedicated type so a `UserId` can never be passed
/// where a product is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require_non_empty("ProductId", value.into()).map(Self)
    }

    /// Fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How hard the product is to install at home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationDifficulty {
    Low,
    Medium,
    High,
}

impl InstallationDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallationDifficulty::Low => "low",
            InstallationDifficulty::Medium => "medium",
            InstallationDifficulty::High => "high",
        }
    }
}

impl FromStr for InstallationDifficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(InstallationDifficulty::Low),
            "medium" => Ok(InstallationDifficulty::Medium),
            "high" => Ok(InstallationDifficulty::High),
            other => Err(ValidationError::UnknownVariant {
                kind: "installation difficulty",
                value: other.to_string(),
            }),
        }
    }
}

/// Closed set of product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    RobotVacuum,
    SmartLock,
    Dishwasher,
    Lighting,
    Sensor,
    Hub,
    Other,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::RobotVacuum => "robot_vacuum",
            ProductCategory::SmartLock => "smart_lock",
            ProductCategory::Dishwasher => "dishwasher",
            ProductCategory::Lighting => "lighting",
            ProductCategory::Sensor => "sensor",
            ProductCategory::Hub => "hub",
            ProductCategory::Other => "other",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "robot_vacuum" => Ok(ProductCategory::RobotVacuum),
            "smart_lock" => Ok(ProductCategory::SmartLock),
            "dishwasher" => Ok(ProductCategory::Dishwasher),
            "lighting" => Ok(ProductCategory::Lighting),
            "sensor" => Ok(ProductCategory::Sensor),
            "hub" => Ok(ProductCategory::Hub),
            "other" => Ok(ProductCategory::Other),
            other => Err(ValidationError::UnknownVariant {
                kind: "product category",
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
