use crate::domain::catalog::{CreateProduct, Product};
use crate::domain::user::{ResidenceInfo, SaveUserContext, SignUp, User, UserContext, UserContextId};
use crate::domain::value::{Email, Price, ValidationError};
use super::messages as pb;

// ============================================================================
// Wire ↔ Domain Conversions
// ============================================================================
//
// Inbound: plain scalars are run through the value object constructors, so a
// bad request fails here before any use case runs.
// Outbound: entities are projected back to plain scalars.
//
// ============================================================================

impl TryFrom<pb::CreateProductRequest> for CreateProduct {
    type Error = ValidationError;

    fn try_from(request: pb::CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: None,
            price: Price::new(request.price)?,
            installation_difficulty: request.installation_difficulty.parse()?,
            category: request.category.parse()?,
            name: request.name,
            description: request.description,
            manufacturer: request.manufacturer,
            purchase_link: request.purchase_link,
            image_url: request.image_url,
            weak_points: request.weak_points,
            strong_points: request.strong_points,
        })
    }
}

impl From<Product> for pb::Product {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            description: product.description,
            price: product.price.amount(),
            manufacturer: product.manufacturer,
            purchase_link: product.purchase_link,
            image_url: product.image_url,
            weak_points: product.weak_points,
            strong_points: product.strong_points,
            installation_difficulty: product.installation_difficulty.as_str().to_string(),
            category: product.category.as_str().to_string(),
        }
    }
}

impl TryFrom<pb::SignUpRequest> for SignUp {
    type Error = ValidationError;

    fn try_from(request: pb::SignUpRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: None,
            email: Email::new(request.email)?,
            name: request.name,
        })
    }
}

impl From<User> for pb::User {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            name: user.name,
        }
    }
}

impl TryFrom<pb::ResidenceInfo> for ResidenceInfo {
    type Error = ValidationError;

    fn try_from(info: pb::ResidenceInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            residence_type: info.residence_type.parse()?,
            age: info.age,
            layout: info.layout,
            ownership: info.ownership.parse()?,
        })
    }
}

impl From<ResidenceInfo> for pb::ResidenceInfo {
    fn from(info: ResidenceInfo) -> Self {
        Self {
            residence_type: info.residence_type.as_str().to_string(),
            age: info.age,
            layout: info.layout,
            ownership: info.ownership.as_str().to_string(),
        }
    }
}

impl From<UserContext> for pb::UserContext {
    fn from(context: UserContext) -> Self {
        Self {
            id: context.id.into(),
            user_id: context.user_id.into(),
            residence: Some(context.residence.into()),
        }
    }
}

/// Splits a save request into the caller-supplied user id (validated later by
/// the use case) and the context payload.
pub fn save_context_command(
    request: pb::SaveUserContextRequest,
) -> Result<(String, SaveUserContext), ValidationError> {
    let id = match request.context_id.as_str() {
        "" => None,
        _ => Some(UserContextId::new(request.context_id)?),
    };
    let residence: ResidenceInfo = request
        .residence
        .ok_or(ValidationError::MissingField("residence"))?
        .try_into()?;

    Ok((request.user_id, SaveUserContext { id, residence }))
}
