use crate::errors::internal::{InternalError, ValidationError};
use crate::types::dto::{ErrorEnvelope, FieldErrorResponse};
use poem::http::StatusCode;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Errors of the bike update endpoint
///
/// The narrower per-endpoint enums below are built from this one, so every
/// internal error is logged and sanitized in [`BikeError::from_internal_error`].
#[derive(ApiResponse, Debug)]
pub enum BikeError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorEnvelope>),

    /// No bike with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

impl BikeError {
    /// Create a ValidationFailed error carrying one entry per rejected field
    pub fn validation_failed(err: ValidationError) -> Self {
        let errors = err
            .violations
            .into_iter()
            .map(|v| FieldErrorResponse {
                field: v.field,
                message: v.message,
            })
            .collect();

        BikeError::ValidationFailed(Json(
            ErrorEnvelope::new(StatusCode::BAD_REQUEST, "Validation Error").with_errors(errors),
        ))
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        BikeError::NotFound(Json(ErrorEnvelope::new(
            StatusCode::NOT_FOUND,
            format!("Bike with id {} not found.", id),
        )))
    }

    /// Create a generic internal server error
    ///
    /// Never carries internal details; those are logged at the conversion point.
    pub fn internal_server_error() -> Self {
        BikeError::InternalError(Json(internal_envelope()))
    }

    /// Convert InternalError to BikeError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::BikeNotFound(id) => {
                tracing::warn!("Bike with id {} not found.", id);
                Self::not_found(&id)
            }
            InternalError::Validation(validation) => {
                tracing::warn!("Data parsing error: {}", validation);
                Self::validation_failed(validation)
            }
            InternalError::Database(_) => {
                tracing::error!("Unexpected error in bike operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn envelope(&self) -> &ErrorEnvelope {
        match self {
            BikeError::ValidationFailed(json) => &json.0,
            BikeError::NotFound(json) => &json.0,
            BikeError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.envelope().message.clone()
    }

    /// HTTP status code carried in the envelope
    pub fn status_code(&self) -> u16 {
        self.envelope().status_code
    }

    /// Field-level details carried in the envelope
    pub fn field_errors(&self) -> &[FieldErrorResponse] {
        &self.envelope().errors
    }
}

impl From<InternalError> for BikeError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl From<ValidationError> for BikeError {
    fn from(err: ValidationError) -> Self {
        Self::from_internal_error(InternalError::Validation(err))
    }
}

impl fmt::Display for BikeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Errors of the bike create endpoint
#[derive(ApiResponse, Debug)]
pub enum CreateBikeError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

impl CreateBikeError {
    fn envelope(&self) -> &ErrorEnvelope {
        match self {
            CreateBikeError::ValidationFailed(json) => &json.0,
            CreateBikeError::InternalError(json) => &json.0,
        }
    }

    pub fn message(&self) -> String {
        self.envelope().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.envelope().status_code
    }
}

impl From<BikeError> for CreateBikeError {
    fn from(err: BikeError) -> Self {
        match err {
            BikeError::ValidationFailed(json) => CreateBikeError::ValidationFailed(json),
            // A freshly generated id can't be missing; anything else is a server fault
            BikeError::NotFound(_) | BikeError::InternalError(_) => {
                CreateBikeError::InternalError(Json(internal_envelope()))
            }
        }
    }
}

impl From<InternalError> for CreateBikeError {
    fn from(err: InternalError) -> Self {
        BikeError::from_internal_error(err).into()
    }
}

impl From<ValidationError> for CreateBikeError {
    fn from(err: ValidationError) -> Self {
        BikeError::from(err).into()
    }
}

/// Errors of the endpoints addressing one bike by id without a body (get, delete)
#[derive(ApiResponse, Debug)]
pub enum BikeLookupError {
    /// No bike with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

impl BikeLookupError {
    fn envelope(&self) -> &ErrorEnvelope {
        match self {
            BikeLookupError::NotFound(json) => &json.0,
            BikeLookupError::InternalError(json) => &json.0,
        }
    }

    pub fn message(&self) -> String {
        self.envelope().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.envelope().status_code
    }
}

impl From<BikeError> for BikeLookupError {
    fn from(err: BikeError) -> Self {
        match err {
            BikeError::NotFound(json) => BikeLookupError::NotFound(json),
            BikeError::ValidationFailed(_) | BikeError::InternalError(_) => {
                BikeLookupError::InternalError(Json(internal_envelope()))
            }
        }
    }
}

impl From<InternalError> for BikeLookupError {
    fn from(err: InternalError) -> Self {
        BikeError::from_internal_error(err).into()
    }
}

/// Errors of the bike list endpoint
#[derive(ApiResponse, Debug)]
pub enum ListBikesError {
    /// Listing bikes failed
    #[oai(status = 400)]
    FetchFailed(Json<ErrorEnvelope>),
}

impl ListBikesError {
    /// Create a FetchFailed error
    pub fn fetch_failed() -> Self {
        ListBikesError::FetchFailed(Json(ErrorEnvelope::new(
            StatusCode::BAD_REQUEST,
            "Error fetching bikes",
        )))
    }

    pub fn message(&self) -> String {
        let ListBikesError::FetchFailed(json) = self;
        json.0.message.clone()
    }

    pub fn status_code(&self) -> u16 {
        let ListBikesError::FetchFailed(json) = self;
        json.0.status_code
    }
}

impl From<InternalError> for ListBikesError {
    fn from(err: InternalError) -> Self {
        tracing::error!("Error fetching bikes: {}", err);
        Self::fetch_failed()
    }
}

fn internal_envelope() -> ErrorEnvelope {
    ErrorEnvelope::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
