pub mod health;
pub mod parking_spot;

use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::constants::{BASE_PATH, CORS_MAX_AGE_SECS};
use crate::service::ParkingSpotService;

/// The full application router with CORS and request tracing.
pub fn app(service: ParkingSpotService) -> Router {
    Router::new()
        .nest(BASE_PATH, parking_spot::router())
        .merge(health::router())
        .layer(
            CorsLayer::permissive().max_age(Duration::from_secs(CORS_MAX_AGE_SECS)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
