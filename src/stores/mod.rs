// Stores layer - Data access
pub mod bike_store;

pub use bike_store::BikeStore;

#[cfg(test)]
mod bike_store_test;
