use tonic::Status;

use crate::domain::catalog::CatalogError;
use crate::domain::user::UserError;
use crate::domain::value::ValidationError;

// ============================================================================
// Domain Error → RPC Status
// ============================================================================
//
// validation      → INVALID_ARGUMENT
// not found       → NOT_FOUND
// not implemented → UNIMPLEMENTED
// storage         → INTERNAL (details stay in the logs)
//
// ============================================================================

impl From<ValidationError> for Status {
    fn from(e: ValidationError) -> Self {
        Status::invalid_argument(e.to_string())
    }
}

impl From<CatalogError> for Status {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(e) => e.into(),
            CatalogError::NotImplemented(operation) => {
                Status::unimplemented(format!("{operation} is not implemented"))
            }
            CatalogError::Storage(details) => {
                tracing::error!(error = %details, "Catalog storage failure");
                Status::internal("catalog storage failure")
            }
        }
    }
}

impl From<UserError> for Status {
    fn from(e: UserError) -> Self {
        match e {
            UserError::Validation(e) => e.into(),
            e if e.is_not_found() => Status::not_found(e.to_string()),
            e => {
                tracing::error!(error = %e, "User storage failure");
                Status::internal("user storage failure")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_validation_maps_to_invalid_argument() {
        let status: Status = CatalogError::from(ValidationError::NegativePrice(-1)).into();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("-1"));

        let status: Status = UserError::from(ValidationError::InvalidEmail("x".into())).into();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_not_found_and_unimplemented_are_distinct() {
        let not_found: Status = UserError::UserNotFound("a@b.com".into()).into();
        let context_missing: Status = UserError::ContextNotFound("u-1".into()).into();
        let unimplemented: Status = CatalogError::NotImplemented("delete_product").into();

        assert_eq!(not_found.code(), Code::NotFound);
        assert_eq!(context_missing.code(), Code::NotFound);
        assert_eq!(unimplemented.code(), Code::Unimplemented);
    }

    #[test]
    fn test_storage_details_are_not_leaked() {
        let status: Status = CatalogError::Storage("node 10.0.0.3 unreachable".into()).into();
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("10.0.0.3"));
    }
}
