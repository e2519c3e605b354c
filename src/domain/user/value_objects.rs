use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value::{require_non_empty, ValidationError};

// ============================================================================
// User Value Objects
// ============================================================================

/// User identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require_non_empty("UserId", value.into()).map(Self)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a stored user context record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserContextId(String);

impl UserContextId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require_non_empty("UserContextId", value.into()).map(Self)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserContextId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserContextId> for String {
    fn from(id: UserContextId) -> Self {
        id.0
    }
}

impl fmt::Display for UserContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceType {
    Apartment,
    House,
    Townhouse,
    Other,
}

impl ResidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidenceType::Apartment => "apartment",
            ResidenceType::House => "house",
            ResidenceType::Townhouse => "townhouse",
            ResidenceType::Other => "other",
        }
    }
}

impl FromStr for ResidenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(ResidenceType::Apartment),
            "house" => Ok(ResidenceType::House),
            "townhouse" => Ok(ResidenceType::Townhouse),
            "other" => Ok(ResidenceType::Other),
            other => Err(ValidationError::UnknownVariant {
                kind: "residence type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Owned,
    Rented,
    Other,
}

impl Ownership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ownership::Owned => "owned",
            Ownership::Rented => "rented",
            Ownership::Other => "other",
        }
    }
}

impl FromStr for Ownership {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owned" => Ok(Ownership::Owned),
            "rented" => Ok(Ownership::Rented),
            "other" => Ok(Ownership::Other),
            other => Err(ValidationError::UnknownVariant {
                kind: "ownership",
                value: other.to_string(),
            }),
        }
    }
}

/// Where the user lives; drives product recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidenceInfo {
    pub residence_type: ResidenceType,
    /// Building age in years
    pub age: i32,
    /// Floor plan in free text, e.g. "2LDK"
    pub layout: String,
    pub ownership: Ownership,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_validation() {
        assert_eq!(UserId::new("u-1").unwrap().as_str(), "u-1");
        assert!(matches!(
            UserId::new(""),
            Err(ValidationError::EmptyIdentifier { field: "UserId" })
        ));
    }

    #[test]
    fn test_context_id_validation() {
        assert_eq!(UserContextId::new("c-1").unwrap().to_string(), "c-1");
        assert!(UserContextId::new("").is_err());
        assert_ne!(UserContextId::generate(), UserContextId::generate());
    }

    #[test]
    fn test_residence_type_parsing() {
        for residence_type in [
            ResidenceType::Apartment,
            ResidenceType::House,
            ResidenceType::Townhouse,
            ResidenceType::Other,
        ] {
            assert_eq!(residence_type.as_str().parse::<ResidenceType>().unwrap(), residence_type);
        }
        assert!("castle".parse::<ResidenceType>().is_err());
    }

    #[test]
    fn test_ownership_parsing() {
        assert_eq!("owned".parse::<Ownership>().unwrap(), Ownership::Owned);
        assert_eq!("rented".parse::<Ownership>().unwrap(), Ownership::Rented);
        assert_eq!("other".parse::<Ownership>().unwrap(), Ownership::Other);
        assert!(matches!(
            "leased".parse::<Ownership>(),
            Err(ValidationError::UnknownVariant { kind: "ownership", .. })
        ));
    }

    #[test]
    fn test_residence_info_serialization() {
        let info = ResidenceInfo {
            residence_type: ResidenceType::Apartment,
            age: 12,
            layout: "2LDK".to_string(),
            ownership: Ownership::Rented,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["residence_type"], "apartment");
        assert_eq!(json["ownership"], "rented");

        let back: ResidenceInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }
}
