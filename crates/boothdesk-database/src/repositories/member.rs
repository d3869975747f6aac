//! Member repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use boothdesk_core::error::{AppError, ErrorKind};
use boothdesk_core::result::AppResult;
use boothdesk_core::types::pagination::{PageRequest, PageResponse};
use boothdesk_entity::member::{CreateMember, Member, MemberFilter, UpdateMember};

/// Repository for member roster CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

/// Per-kizhai member count for the dashboard.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct KizhaiMemberCount {
    /// The kizhai.
    pub kizhai_id: Uuid,
    /// Kizhai name.
    pub kizhai_name: String,
    /// Members assigned to it.
    pub member_count: i64,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member", e))
    }

    /// List members with optional filters, newest first.
    pub async fn find_all(
        &self,
        filter: &MemberFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Member>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM members \
             WHERE ($1::uuid IS NULL OR kizhai_id = $1) \
               AND ($2::uuid IS NULL OR booth_id = $2) \
               AND ($3::text IS NULL OR name ILIKE $3 OR phone ILIKE $3)",
        )
        .bind(filter.kizhai_id)
        .bind(filter.booth_id)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count members", e))?;

        let members = sqlx::query_as::<_, Member>(
            "SELECT * FROM members \
             WHERE ($1::uuid IS NULL OR kizhai_id = $1) \
               AND ($2::uuid IS NULL OR booth_id = $2) \
               AND ($3::text IS NULL OR name ILIKE $3 OR phone ILIKE $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(filter.kizhai_id)
        .bind(filter.booth_id)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))?;

        Ok(PageResponse::new(
            members,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Enroll a new member.
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members \
             (name, phone, email, gender, age, voter_id, address, booth_id, kizhai_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.gender)
        .bind(data.age)
        .bind(&data.voter_id)
        .bind(&data.address)
        .bind(data.booth_id)
        .bind(data.kizhai_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create member", e))
    }

    /// Apply a partial update. Returns the updated row, or `None` if absent.
    pub async fn update(&self, id: Uuid, data: &UpdateMember) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET \
             name = COALESCE($2, name), \
             phone = COALESCE($3, phone), \
             email = COALESCE($4, email), \
             gender = COALESCE($5, gender), \
             age = COALESCE($6, age), \
             voter_id = COALESCE($7, voter_id), \
             address = COALESCE($8, address), \
             booth_id = COALESCE($9, booth_id), \
             kizhai_id = COALESCE($10, kizhai_id), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.gender)
        .bind(data.age)
        .bind(&data.voter_id)
        .bind(&data.address)
        .bind(data.booth_id)
        .bind(data.kizhai_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update member", e))
    }

    /// Delete a member. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete member", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Count all enrolled members.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count members", e))
    }

    /// Member counts grouped by kizhai, largest first.
    pub async fn count_by_kizhai(&self) -> AppResult<Vec<KizhaiMemberCount>> {
        sqlx::query_as::<_, KizhaiMemberCount>(
            "SELECT k.id AS kizhai_id, k.name AS kizhai_name, COUNT(m.id) AS member_count \
             FROM kizhais k LEFT JOIN members m ON m.kizhai_id = k.id \
             GROUP BY k.id, k.name ORDER BY member_count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count members by kizhai", e)
        })
    }
}
