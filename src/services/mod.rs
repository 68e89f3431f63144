// Services layer - Business logic
pub mod bike_validator;

pub use bike_validator::{BikeChanges, BikeValidator, NewBike, MIN_YEAR};
