// Common test utilities for integration tests

use bike_library::AppData;
use bike_library::api::build_app;
use migration::{Migrator, MigratorTrait};
use poem::Endpoint;
use poem::test::TestClient;
use sea_orm::{Database, DatabaseConnection};

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

/// Creates an HTTP test client for the full application over a fresh database
pub async fn setup_test_client() -> TestClient<impl Endpoint> {
    let (_db, cli) = setup_test_app().await;
    cli
}

/// Like [`setup_test_client`], also handing back the database behind the app
pub async fn setup_test_app() -> (DatabaseConnection, TestClient<impl Endpoint>) {
    let db = setup_test_db().await;
    let app_data = AppData::init(db.clone());
    (db, TestClient::new(build_app(&app_data, "http://localhost:3001")))
}
