// Data transfer objects - API request/response shapes
pub mod bike;
pub mod common;
pub mod raw_body;

pub use bike::{BikeCategory, BikeResponse, CreateBikeRequest, UpdateBikeRequest};
pub use common::{ErrorEnvelope, FieldErrorResponse};
pub use raw_body::RawBody;
