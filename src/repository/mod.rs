pub mod errors;
pub mod memory;
pub mod parking_spot_repo;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Page, PageRequest, ParkingSpot};

pub use errors::{RepositoryError, RepositoryResult};
pub use memory::InMemoryParkingSpotRepository;
pub use parking_spot_repo::PgParkingSpotRepository;

/// Storage operations over the parking spot table.
///
/// Absence is never an error: lookups return `None` and existence checks
/// return `false`. Storage faults are passed through untouched.
#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepositoryResult<bool>;

    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepositoryResult<bool>;

    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> RepositoryResult<bool>;

    /// Inserts the record, or replaces the one with the same id.
    async fn save(&self, spot: &ParkingSpot) -> RepositoryResult<ParkingSpot>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ParkingSpot>>;

    async fn find_all(&self, request: &PageRequest) -> RepositoryResult<Page<ParkingSpot>>;

    async fn delete(&self, spot: &ParkingSpot) -> RepositoryResult<()>;
}
