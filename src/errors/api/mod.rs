// API-facing error types
pub mod bike;

// Re-exports for convenience
pub use bike::{BikeError, BikeLookupError, CreateBikeError, ListBikesError};
