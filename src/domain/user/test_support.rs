use crate::domain::value::Email;
use super::aggregate::{User, UserContext};
use super::commands::SignUp;
use super::value_objects::{Ownership, ResidenceInfo, ResidenceType, UserContextId, UserId};

pub(crate) fn sample_sign_up(email: &str) -> SignUp {
    SignUp {
        id: None,
        email: Email::new(email).unwrap(),
        name: "Test User".to_string(),
    }
}

pub(crate) fn sample_user(id: &str, email: &str) -> User {
    sample_sign_up(email).into_user(UserId::new(id).unwrap())
}

pub(crate) fn sample_residence() -> ResidenceInfo {
    ResidenceInfo {
        residence_type: ResidenceType::Apartment,
        age: 15,
        layout: "2LDK".to_string(),
        ownership: Ownership::Rented,
    }
}

pub(crate) fn sample_context(user_id: &str) -> UserContext {
    UserContext {
        id: UserContextId::generate(),
        user_id: UserId::new(user_id).unwrap(),
        residence: sample_residence(),
    }
}
