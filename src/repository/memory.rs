use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ParkingSpotRepository, RepositoryResult};
use crate::models::{Direction, Page, PageRequest, ParkingSpot};

/// Map-backed store. Used by the test suites and by `STORAGE_BACKEND=memory`.
#[derive(Default)]
pub struct InMemoryParkingSpotRepository {
    spots: RwLock<HashMap<Uuid, ParkingSpot>>,
}

impl InMemoryParkingSpotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.spots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.spots.read().await.is_empty()
    }
}

#[async_trait]
impl ParkingSpotRepository for InMemoryParkingSpotRepository {
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepositoryResult<bool> {
        let spots = self.spots.read().await;
        Ok(spots.values().any(|s| s.license_plate_car == license_plate_car))
    }

    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepositoryResult<bool> {
        let spots = self.spots.read().await;
        Ok(spots.values().any(|s| s.parking_spot_number == parking_spot_number))
    }

    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> RepositoryResult<bool> {
        let spots = self.spots.read().await;
        Ok(spots
            .values()
            .any(|s| s.apartment == apartment && s.block == block))
    }

    async fn save(&self, spot: &ParkingSpot) -> RepositoryResult<ParkingSpot> {
        self.spots.write().await.insert(spot.id, spot.clone());
        Ok(spot.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ParkingSpot>> {
        Ok(self.spots.read().await.get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> RepositoryResult<Page<ParkingSpot>> {
        let mut all: Vec<ParkingSpot> = self.spots.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            request
                .sort
                .iter()
                .fold(Ordering::Equal, |ordering, sort| {
                    ordering.then_with(|| {
                        let ordering = a.compare_by(b, sort.field);
                        match sort.direction {
                            Direction::Asc => ordering,
                            Direction::Desc => ordering.reverse(),
                        }
                    })
                })
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = all.len() as u64;
        let content = all
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(request.size as usize)
            .collect();
        Ok(Page::new(content, request, total))
    }

    async fn delete(&self, spot: &ParkingSpot) -> RepositoryResult<()> {
        self.spots.write().await.remove(&spot.id);
        Ok(())
    }
}
