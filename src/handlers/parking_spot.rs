use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::Query;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{API_NAME, PARKING_SPOT_DELETED};
use crate::error::AppError;
use crate::models::{Page, PageParams, PageRequest, ParkingSpot, ParkingSpotPayload};
use crate::service::ParkingSpotService;

pub fn router() -> Router<ParkingSpotService> {
    Router::new()
        .route("/", get(list_parking_spots).post(create_parking_spot))
        .route(
            "/:id",
            get(get_parking_spot)
                .put(update_parking_spot)
                .delete(delete_parking_spot),
        )
}

async fn create_parking_spot(
    State(service): State<ParkingSpotService>,
    Json(payload): Json<ParkingSpotPayload>,
) -> Result<(StatusCode, Json<ParkingSpot>), AppError> {
    payload.validate()?;

    tracing::info!(
        "{} Received create request for spot {}",
        API_NAME,
        payload.parking_spot_number
    );

    let spot = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(spot)))
}

async fn list_parking_spots(
    State(service): State<ParkingSpotService>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ParkingSpot>>, AppError> {
    let request = PageRequest::from_params(params)?;
    Ok(Json(service.list(request).await?))
}

async fn get_parking_spot(
    State(service): State<ParkingSpotService>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParkingSpot>, AppError> {
    Ok(Json(service.get(id).await?))
}

async fn delete_parking_spot(
    State(service): State<ParkingSpotService>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, AppError> {
    service.delete(id).await?;
    Ok(PARKING_SPOT_DELETED)
}

async fn update_parking_spot(
    State(service): State<ParkingSpotService>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ParkingSpotPayload>,
) -> Result<Json<ParkingSpot>, AppError> {
    payload.validate()?;

    tracing::info!("{} Received update request for {}", API_NAME, id);

    Ok(Json(service.update(id, payload).await?))
}
