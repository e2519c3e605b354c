use crate::domain::value::ValidationError;

// ============================================================================
// Catalog Errors
// ============================================================================
//
// A missing product is not an error here: lookups return `Option`.
//

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("catalog storage failure: {0}")]
    Storage(String),
}
