use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::constants::{
    API_NAME, APARTMENT_AND_BLOCK_IN_USE, LICENSE_PLATE_IN_USE, PARKING_SPOT_NOT_FOUND,
    PARKING_SPOT_NUMBER_IN_USE,
};
use crate::error::AppError;
use crate::models::{Page, PageRequest, ParkingSpot, ParkingSpotPayload};
use crate::repository::ParkingSpotRepository;

#[derive(Clone)]
pub struct ParkingSpotService {
    repository: Arc<dyn ParkingSpotRepository>,
}

impl ParkingSpotService {
    pub fn new(repository: Arc<dyn ParkingSpotRepository>) -> Self {
        Self { repository }
    }

    /// Creates a spot after checking plate, spot number and apartment/block
    /// in that order. The first check that fails wins.
    pub async fn create(&self, payload: ParkingSpotPayload) -> Result<ParkingSpot, AppError> {
        if self
            .repository
            .exists_by_license_plate_car(&payload.license_plate_car)
            .await?
        {
            return Err(AppError::Conflict(LICENSE_PLATE_IN_USE.to_string()));
        }
        if self
            .repository
            .exists_by_parking_spot_number(&payload.parking_spot_number)
            .await?
        {
            return Err(AppError::Conflict(PARKING_SPOT_NUMBER_IN_USE.to_string()));
        }
        if self
            .repository
            .exists_by_apartment_and_block(&payload.apartment, &payload.block)
            .await?
        {
            return Err(AppError::Conflict(APARTMENT_AND_BLOCK_IN_USE.to_string()));
        }

        let spot = ParkingSpot::from_payload(payload, Uuid::new_v4(), Utc::now());
        let saved = self.repository.save(&spot).await?;

        tracing::info!(
            "{} Created parking spot {} (number {}, plate {})",
            API_NAME,
            saved.id,
            saved.parking_spot_number,
            saved.license_plate_car
        );
        Ok(saved)
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<ParkingSpot>, AppError> {
        tracing::debug!(
            "{} Listing parking spots page {} size {} order {}",
            API_NAME,
            request.page,
            request.size,
            request.order_by()
        );
        Ok(self.repository.find_all(&request).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<ParkingSpot, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PARKING_SPOT_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        self.repository.delete(&existing).await?;
        tracing::info!("{} Deleted parking spot {}", API_NAME, id);
        Ok(())
    }

    /// Replaces every client-settable field. The id and registration date of
    /// the stored record are kept; uniqueness is not re-checked.
    pub async fn update(
        &self,
        id: Uuid,
        payload: ParkingSpotPayload,
    ) -> Result<ParkingSpot, AppError> {
        let existing = self.get(id).await?;
        let spot = ParkingSpot::from_payload(payload, existing.id, existing.registration_date);
        let saved = self.repository.save(&spot).await?;
        tracing::info!("{} Updated parking spot {}", API_NAME, id);
        Ok(saved)
    }
}
