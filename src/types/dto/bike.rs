use poem_openapi::{Enum, Object};
use std::fmt;
use std::str::FromStr;

use crate::types::db::bike;

/// Closed set of bike categories accepted on write
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "UPPERCASE")]
pub enum BikeCategory {
    Cruiser,
    Sport,
    Adventure,
    Touring,
    Dirt,
    Standard,
}

impl BikeCategory {
    pub const ALL: [BikeCategory; 6] = [
        BikeCategory::Cruiser,
        BikeCategory::Sport,
        BikeCategory::Adventure,
        BikeCategory::Touring,
        BikeCategory::Dirt,
        BikeCategory::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BikeCategory::Cruiser => "CRUISER",
            BikeCategory::Sport => "SPORT",
            BikeCategory::Adventure => "ADVENTURE",
            BikeCategory::Touring => "TOURING",
            BikeCategory::Dirt => "DIRT",
            BikeCategory::Standard => "STANDARD",
        }
    }
}

impl FromStr for BikeCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for BikeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for registering a bike
///
/// `year` must lie between 1900 and the current calendar year.
#[derive(Object, Debug)]
pub struct CreateBikeRequest {
    /// Manufacturer name
    #[oai(validator(min_length = 1))]
    pub make: String,

    /// Model name
    #[oai(validator(min_length = 1))]
    pub model: String,

    /// Model year (1900 up to the current year)
    #[oai(validator(minimum(value = "1900")))]
    pub year: i32,

    /// Bike category
    pub category: BikeCategory,
}

/// Request body for a partial bike update
///
/// Every field is optional; an empty object leaves the bike unchanged.
#[derive(Object, Debug)]
pub struct UpdateBikeRequest {
    /// Manufacturer name
    #[oai(validator(min_length = 1))]
    pub make: Option<String>,

    /// Model name
    #[oai(validator(min_length = 1))]
    pub model: Option<String>,

    /// Model year (1900 up to the current year)
    #[oai(validator(minimum(value = "1900")))]
    pub year: Option<i32>,

    /// Bike category
    pub category: Option<BikeCategory>,
}

/// Bike as returned to API clients
#[derive(Object, Debug, Clone, PartialEq)]
pub struct BikeResponse {
    /// Unique identifier (UUID)
    pub id: String,

    /// Manufacturer name
    pub make: String,

    /// Model name
    pub model: String,

    /// Model year
    pub year: i32,

    /// Bike category
    pub category: String,
}

// Copies exactly the public record fields; anything else on the row stays behind.
impl From<bike::Model> for BikeResponse {
    fn from(model: bike::Model) -> Self {
        Self {
            id: model.id,
            make: model.make,
            model: model.model,
            year: model.year,
            category: model.category,
        }
    }
}
