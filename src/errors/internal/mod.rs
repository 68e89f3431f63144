use thiserror::Error;

pub mod database;
pub mod validation;

pub use database::DatabaseError;
pub use validation::{FieldViolation, ValidationError};

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints convert to `BikeError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Bike with id {0} not found.")]
    BikeNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn bike_not_found(id: impl Into<String>) -> InternalError {
        InternalError::BikeNotFound(id.into())
    }
}
