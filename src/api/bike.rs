use poem_openapi::{ApiResponse, OpenApi, Tags, param::Path, payload::Json};
use std::sync::Arc;

use crate::errors::{BikeError, BikeLookupError, CreateBikeError, ListBikesError};
use crate::services::BikeValidator;
use crate::stores::BikeStore;
use crate::types::dto::{BikeResponse, CreateBikeRequest, RawBody, UpdateBikeRequest};

/// Bike inventory API endpoints
pub struct BikeApi {
    bike_store: Arc<BikeStore>,
    validator: BikeValidator,
}

impl BikeApi {
    /// Create a new BikeApi backed by the given store
    pub fn new(bike_store: Arc<BikeStore>) -> Self {
        Self {
            bike_store,
            validator: BikeValidator::new(),
        }
    }
}

/// API tags for bike endpoints
#[derive(Tags)]
enum BikeTags {
    /// Bike inventory management
    Bikes,
}

/// Response for a successful create
#[derive(ApiResponse)]
pub enum CreateBikeResponse {
    /// Bike created
    #[oai(status = 201)]
    Created(Json<BikeResponse>),
}

#[OpenApi]
impl BikeApi {
    /// Register a new bike
    #[oai(path = "/bike", method = "post", tag = "BikeTags::Bikes")]
    async fn create(
        &self,
        body: Json<RawBody<CreateBikeRequest>>,
    ) -> Result<CreateBikeResponse, CreateBikeError> {
        tracing::info!("POST /bike - Payload {}", body.0.value());

        let new_bike = self.validator.validate_create(body.0.value())?;
        let created = self.bike_store.create(new_bike).await?;

        Ok(CreateBikeResponse::Created(Json(created.into())))
    }

    /// List every bike
    #[oai(path = "/bike", method = "get", tag = "BikeTags::Bikes")]
    async fn find_all(&self) -> Result<Json<Vec<BikeResponse>>, ListBikesError> {
        tracing::info!("GET /bike");

        let bikes = self.bike_store.list().await?;

        Ok(Json(bikes.into_iter().map(BikeResponse::from).collect()))
    }

    /// Fetch a bike by id
    #[oai(path = "/bike/:id", method = "get", tag = "BikeTags::Bikes")]
    async fn find_one(&self, id: Path<String>) -> Result<Json<BikeResponse>, BikeLookupError> {
        tracing::info!("GET /bike/{}", id.0);

        let bike = self.bike_store.get_by_id(&id.0).await?;

        Ok(Json(bike.into()))
    }

    /// Update some or all fields of a bike
    #[oai(path = "/bike/:id", method = "patch", tag = "BikeTags::Bikes")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<RawBody<UpdateBikeRequest>>,
    ) -> Result<Json<BikeResponse>, BikeError> {
        tracing::info!("PATCH /bike/{} - Payload {}", id.0, body.0.value());

        let changes = self.validator.validate_update(body.0.value())?;
        let updated = self.bike_store.update(&id.0, changes).await?;

        Ok(Json(updated.into()))
    }

    /// Delete a bike and return the removed record
    #[oai(path = "/bike/:id", method = "delete", tag = "BikeTags::Bikes")]
    async fn remove(&self, id: Path<String>) -> Result<Json<BikeResponse>, BikeLookupError> {
        tracing::info!("DELETE /bike/{}", id.0);

        let deleted = self.bike_store.delete(&id.0).await?;

        Ok(Json(deleted.into()))
    }
}
