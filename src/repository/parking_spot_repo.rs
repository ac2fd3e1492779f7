use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ParkingSpotRepository, RepositoryResult};
use crate::models::{Page, PageRequest, ParkingSpot};

const COLUMNS: &str = "id, parking_spot_number, license_plate_car, brand_car, model_car, \
                       color_car, registration_date, responsible_name, apartment, block";

#[derive(Clone)]
pub struct PgParkingSpotRepository {
    pool: PgPool,
}

impl PgParkingSpotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> RepositoryResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ParkingSpotRepository for PgParkingSpotRepository {
    async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> RepositoryResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tb_parking_spot WHERE license_plate_car = $1)",
        )
        .bind(license_plate_car)
        .fetch_one(&self.pool)
        .await?;
        Ok(result)
    }

    async fn exists_by_parking_spot_number(&self, parking_spot_number: &str) -> RepositoryResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tb_parking_spot WHERE parking_spot_number = $1)",
        )
        .bind(parking_spot_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(result)
    }

    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> RepositoryResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tb_parking_spot WHERE apartment = $1 AND block = $2)",
        )
        .bind(apartment)
        .bind(block)
        .fetch_one(&self.pool)
        .await?;
        Ok(result)
    }

    async fn save(&self, spot: &ParkingSpot) -> RepositoryResult<ParkingSpot> {
        let query = format!(
            "INSERT INTO tb_parking_spot ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                 parking_spot_number = EXCLUDED.parking_spot_number, \
                 license_plate_car = EXCLUDED.license_plate_car, \
                 brand_car = EXCLUDED.brand_car, \
                 model_car = EXCLUDED.model_car, \
                 color_car = EXCLUDED.color_car, \
                 registration_date = EXCLUDED.registration_date, \
                 responsible_name = EXCLUDED.responsible_name, \
                 apartment = EXCLUDED.apartment, \
                 block = EXCLUDED.block \
             RETURNING {COLUMNS}"
        );

        let saved = sqlx::query_as::<_, ParkingSpot>(&query)
            .bind(spot.id)
            .bind(&spot.parking_spot_number)
            .bind(&spot.license_plate_car)
            .bind(&spot.brand_car)
            .bind(&spot.model_car)
            .bind(&spot.color_car)
            .bind(spot.registration_date)
            .bind(&spot.responsible_name)
            .bind(&spot.apartment)
            .bind(&spot.block)
            .fetch_one(&self.pool)
            .await?;
        Ok(saved)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ParkingSpot>> {
        let query = format!("SELECT {COLUMNS} FROM tb_parking_spot WHERE id = $1");
        let spot = sqlx::query_as::<_, ParkingSpot>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(spot)
    }

    async fn find_all(&self, request: &PageRequest) -> RepositoryResult<Page<ParkingSpot>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_parking_spot")
            .fetch_one(&self.pool)
            .await?;

        // The ORDER BY list only ever contains column names from SortField.
        let query = format!(
            "SELECT {COLUMNS} FROM tb_parking_spot ORDER BY {}, id ASC LIMIT $1 OFFSET $2",
            request.order_by()
        );
        let content = sqlx::query_as::<_, ParkingSpot>(&query)
            .bind(i64::from(request.size))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn delete(&self, spot: &ParkingSpot) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM tb_parking_spot WHERE id = $1")
            .bind(spot.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
