use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::BikeStore;

/// Application dependencies created once at startup and shared by the API
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db)
///   ├─ db (DatabaseConnection)
///   └─ bike_store (Arc<BikeStore>)
///   ↓
/// api::build_app(&app_data, ..) → BikeApi::new(bike_store)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub bike_store: Arc<BikeStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let bike_store = Arc::new(BikeStore::new(db.clone()));
        tracing::debug!("AppData initialization complete");

        Self { db, bike_store }
    }
}
