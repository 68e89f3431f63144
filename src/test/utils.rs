// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::stores::BikeStore;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a bike store over a fresh in-memory database
///
/// Returns (db, bike_store); callers can discard what they don't need.
pub async fn setup_test_store() -> (DatabaseConnection, Arc<BikeStore>) {
    let db = setup_test_db().await;
    let bike_store = Arc::new(BikeStore::new(db.clone()));
    (db, bike_store)
}
