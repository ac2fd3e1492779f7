use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::page::SortField;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// A persisted parking spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub registration_date: DateTime<Utc>,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

/// Client-settable fields of a parking spot, as received on create and update.
///
/// `id` and `registrationDate` are not part of the payload; if a client sends
/// them they are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotPayload {
    #[validate(custom(function = "not_blank"))]
    pub parking_spot_number: String,
    #[serde(alias = "licensePlaceCar")]
    #[validate(custom(function = "not_blank"))]
    pub license_plate_car: String,
    #[validate(custom(function = "not_blank"))]
    pub brand_car: String,
    #[validate(custom(function = "not_blank"))]
    pub model_car: String,
    #[validate(custom(function = "not_blank"))]
    pub color_car: String,
    #[validate(custom(function = "not_blank"))]
    pub responsible_name: String,
    #[validate(custom(function = "not_blank"))]
    pub apartment: String,
    #[validate(custom(function = "not_blank"))]
    pub block: String,
}

impl ParkingSpot {
    /// Builds a record from a payload. Every client-settable field is listed
    /// here; `id` and `registration_date` always come from the server.
    pub fn from_payload(
        payload: ParkingSpotPayload,
        id: Uuid,
        registration_date: DateTime<Utc>,
    ) -> Self {
        let ParkingSpotPayload {
            parking_spot_number,
            license_plate_car,
            brand_car,
            model_car,
            color_car,
            responsible_name,
            apartment,
            block,
        } = payload;

        Self {
            id,
            parking_spot_number,
            license_plate_car,
            brand_car,
            model_car,
            color_car,
            registration_date,
            responsible_name,
            apartment,
            block,
        }
    }

    /// Orders two records by a single field, ascending.
    pub fn compare_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::ParkingSpotNumber => self.parking_spot_number.cmp(&other.parking_spot_number),
            SortField::LicensePlateCar => self.license_plate_car.cmp(&other.license_plate_car),
            SortField::BrandCar => self.brand_car.cmp(&other.brand_car),
            SortField::ModelCar => self.model_car.cmp(&other.model_car),
            SortField::ColorCar => self.color_car.cmp(&other.color_car),
            SortField::RegistrationDate => self.registration_date.cmp(&other.registration_date),
            SortField::ResponsibleName => self.responsible_name.cmp(&other.responsible_name),
            SortField::Apartment => self.apartment.cmp(&other.apartment),
            SortField::Block => self.block.cmp(&other.block),
        }
    }
}
