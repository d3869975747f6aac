//! Kizhai repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use boothdesk_core::error::{AppError, ErrorKind};
use boothdesk_core::result::AppResult;
use boothdesk_entity::kizhai::{CreateKizhai, Kizhai, UpdateKizhai};

/// Repository for kizhai (branch unit) CRUD operations.
#[derive(Debug, Clone)]
pub struct KizhaiRepository {
    pool: PgPool,
}

impl KizhaiRepository {
    /// Create a new kizhai repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a kizhai by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Kizhai>> {
        sqlx::query_as::<_, Kizhai>("SELECT * FROM kizhais WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find kizhai", e))
    }

    /// List every kizhai alphabetically. The set is small enough that the
    /// list endpoint is unpaginated.
    pub async fn find_all(&self) -> AppResult<Vec<Kizhai>> {
        sqlx::query_as::<_, Kizhai>("SELECT * FROM kizhais ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list kizhais", e))
    }

    /// Record a new kizhai.
    pub async fn create(&self, data: &CreateKizhai) -> AppResult<Kizhai> {
        sqlx::query_as::<_, Kizhai>(
            "INSERT INTO kizhais (name, zone, coordinator_name, coordinator_phone) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.zone)
        .bind(&data.coordinator_name)
        .bind(&data.coordinator_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create kizhai", e))
    }

    /// Apply a partial update. Returns the updated row, or `None` if absent.
    pub async fn update(&self, id: Uuid, data: &UpdateKizhai) -> AppResult<Option<Kizhai>> {
        sqlx::query_as::<_, Kizhai>(
            "UPDATE kizhais SET \
             name = COALESCE($2, name), \
             zone = COALESCE($3, zone), \
             coordinator_name = COALESCE($4, coordinator_name), \
             coordinator_phone = COALESCE($5, coordinator_phone), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.zone)
        .bind(&data.coordinator_name)
        .bind(&data.coordinator_phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update kizhai", e))
    }

    /// Delete a kizhai. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM kizhais WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete kizhai", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Count all kizhais.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM kizhais")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count kizhais", e))
    }
}
