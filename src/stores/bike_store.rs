use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::services::{BikeChanges, NewBike};
use crate::types::db::bike;

/// Single-table accessor for bike records
///
/// Every method is one round-trip against the `bikes` table. Errors from the
/// database are passed up tagged with the failing operation; nothing is retried.
pub struct BikeStore {
    db: DatabaseConnection,
}

impl BikeStore {
    /// Create a new BikeStore
    ///
    /// # Arguments
    /// * `db` - Database connection holding the `bikes` table
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a bike with a freshly generated id
    pub async fn create(&self, new_bike: NewBike) -> Result<bike::Model, InternalError> {
        tracing::info!("Creating a new bike: {:?}", new_bike);

        let record = bike::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            make: Set(new_bike.make),
            model: Set(new_bike.model),
            year: Set(new_bike.year),
            category: Set(new_bike.category.as_str().to_string()),
        };

        record.insert(&self.db).await.map_err(|e| {
            tracing::error!("Failed to create bike: {}", e);
            InternalError::database("create_bike", e)
        })
    }

    /// Fetch every bike
    pub async fn list(&self) -> Result<Vec<bike::Model>, InternalError> {
        tracing::info!("Fetching all bikes.");

        bike::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_bikes", e))
    }

    /// Fetch one bike by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The bike
    /// * `Err(InternalError::BikeNotFound)` - No bike has this id
    pub async fn get_by_id(&self, id: &str) -> Result<bike::Model, InternalError> {
        bike::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_bike", e))?
            .ok_or_else(|| InternalError::bike_not_found(id))
    }

    /// Replace the supplied fields of a bike, keeping its id
    ///
    /// An empty change set writes nothing and returns the stored bike.
    pub async fn update(
        &self,
        id: &str,
        changes: BikeChanges,
    ) -> Result<bike::Model, InternalError> {
        if changes.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut record = bike::ActiveModel {
            id: Set(id.to_string()),
            ..Default::default()
        };
        if let Some(make) = changes.make {
            record.make = Set(make);
        }
        if let Some(model) = changes.model {
            record.model = Set(model);
        }
        if let Some(year) = changes.year {
            record.year = Set(year);
        }
        if let Some(category) = changes.category {
            record.category = Set(category.as_str().to_string());
        }

        record.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => InternalError::bike_not_found(id),
            other => InternalError::database("update_bike", other),
        })
    }

    /// Hard-delete a bike and return the removed record
    ///
    /// One `DELETE ... RETURNING` statement: the returned row is exactly what
    /// was removed, and an empty result means the bike did not exist (or was
    /// removed concurrently).
    pub async fn delete(&self, id: &str) -> Result<bike::Model, InternalError> {
        let deleted = bike::Entity::delete_by_id(id)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_bike", e))?;

        deleted.into_iter().next().ok_or_else(|| {
            tracing::warn!("Bike with id {} does not exist.", id);
            InternalError::bike_not_found(id)
        })
    }
}
