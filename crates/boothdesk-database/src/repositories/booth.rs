//! Booth repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use boothdesk_core::error::{AppError, ErrorKind};
use boothdesk_core::result::AppResult;
use boothdesk_core::types::pagination::{PageRequest, PageResponse};
use boothdesk_entity::booth::{Booth, CreateBooth, UpdateBooth};

/// Repository for polling booth CRUD and query operations.
#[derive(Debug, Clone)]
pub struct BoothRepository {
    pool: PgPool,
}

impl BoothRepository {
    /// Create a new booth repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booth by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booth>> {
        sqlx::query_as::<_, Booth>("SELECT * FROM booths WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booth", e))
    }

    /// List booths, optionally restricted to one kizhai, by booth number.
    pub async fn find_all(
        &self,
        kizhai_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booth>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM booths WHERE ($1::uuid IS NULL OR kizhai_id = $1)",
        )
        .bind(kizhai_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count booths", e))?;

        let booths = sqlx::query_as::<_, Booth>(
            "SELECT * FROM booths WHERE ($1::uuid IS NULL OR kizhai_id = $1) \
             ORDER BY number ASC LIMIT $2 OFFSET $3",
        )
        .bind(kizhai_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list booths", e))?;

        Ok(PageResponse::new(
            booths,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Record a new booth.
    pub async fn create(&self, data: &CreateBooth) -> AppResult<Booth> {
        sqlx::query_as::<_, Booth>(
            "INSERT INTO booths (number, name, address, latitude, longitude, kizhai_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.number)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.kizhai_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booth", e))
    }

    /// Apply a partial update. Returns the updated row, or `None` if absent.
    pub async fn update(&self, id: Uuid, data: &UpdateBooth) -> AppResult<Option<Booth>> {
        sqlx::query_as::<_, Booth>(
            "UPDATE booths SET \
             number = COALESCE($2, number), \
             name = COALESCE($3, name), \
             address = COALESCE($4, address), \
             latitude = COALESCE($5, latitude), \
             longitude = COALESCE($6, longitude), \
             kizhai_id = COALESCE($7, kizhai_id), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.number)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.kizhai_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booth", e))
    }

    /// Delete a booth. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM booths WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete booth", e))?;
        Ok(result.rows_affected())
    }

    /// Count all booths.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM booths")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count booths", e))
    }
}
