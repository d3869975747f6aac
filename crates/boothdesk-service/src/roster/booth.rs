//! Polling booth use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_core::types::pagination::{PageRequest, PageResponse};
use boothdesk_database::repositories::{BoothRepository, KizhaiRepository};
use boothdesk_entity::booth::{Booth, CreateBooth, UpdateBooth};

use crate::context::RequestContext;

/// Booth registry operations.
#[derive(Debug, Clone)]
pub struct BoothService {
    booths: Arc<BoothRepository>,
    kizhais: Arc<KizhaiRepository>,
}

impl BoothService {
    /// Creates a new booth service.
    pub fn new(booths: Arc<BoothRepository>, kizhais: Arc<KizhaiRepository>) -> Self {
        Self { booths, kizhais }
    }

    /// Lists booths, optionally restricted to one kizhai.
    pub async fn list(
        &self,
        kizhai_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booth>> {
        self.booths.find_all(kizhai_id, page).await
    }

    /// Loads one booth.
    pub async fn get(&self, id: Uuid) -> AppResult<Booth> {
        self.booths
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booth not found"))
    }

    /// Records a new booth. The owning kizhai must exist when given.
    pub async fn create(&self, ctx: &RequestContext, data: CreateBooth) -> AppResult<Booth> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Booth name cannot be empty"));
        }
        if data.number <= 0 {
            return Err(AppError::validation("Booth number must be positive"));
        }
        self.check_kizhai(data.kizhai_id).await?;

        let booth = self.booths.create(&data).await?;
        info!(booth_id = %booth.id, actor_id = %ctx.user_id, "booth created");
        Ok(booth)
    }

    /// Applies a partial update to a booth.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateBooth,
    ) -> AppResult<Booth> {
        if let Some(number) = data.number {
            if number <= 0 {
                return Err(AppError::validation("Booth number must be positive"));
            }
        }
        self.check_kizhai(data.kizhai_id).await?;

        let booth = self
            .booths
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Booth not found"))?;
        info!(booth_id = %booth.id, actor_id = %ctx.user_id, "booth updated");
        Ok(booth)
    }

    /// Removes a booth.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let removed = self.booths.delete(id).await?;
        if removed == 0 {
            return Err(AppError::not_found("Booth not found"));
        }
        info!(booth_id = %id, actor_id = %ctx.user_id, "booth removed");
        Ok(())
    }

    async fn check_kizhai(&self, kizhai_id: Option<Uuid>) -> AppResult<()> {
        if let Some(kizhai_id) = kizhai_id {
            if self.kizhais.find_by_id(kizhai_id).await?.is_none() {
                return Err(AppError::validation("Owning kizhai does not exist"));
            }
        }
        Ok(())
    }
}
