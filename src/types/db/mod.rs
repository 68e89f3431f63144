// Database entities - SeaORM models
pub mod bike;
