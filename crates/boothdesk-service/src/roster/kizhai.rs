//! Kizhai (branch unit) use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::KizhaiRepository;
use boothdesk_entity::kizhai::{CreateKizhai, Kizhai, UpdateKizhai};

use crate::context::RequestContext;

/// Kizhai registry operations.
#[derive(Debug, Clone)]
pub struct KizhaiService {
    kizhais: Arc<KizhaiRepository>,
}

impl KizhaiService {
    /// Creates a new kizhai service.
    pub fn new(kizhais: Arc<KizhaiRepository>) -> Self {
        Self { kizhais }
    }

    /// Lists every kizhai alphabetically.
    pub async fn list(&self) -> AppResult<Vec<Kizhai>> {
        self.kizhais.find_all().await
    }

    /// Loads one kizhai.
    pub async fn get(&self, id: Uuid) -> AppResult<Kizhai> {
        self.kizhais
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Kizhai not found"))
    }

    /// Records a new kizhai.
    pub async fn create(&self, ctx: &RequestContext, data: CreateKizhai) -> AppResult<Kizhai> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Kizhai name cannot be empty"));
        }

        let kizhai = self.kizhais.create(&data).await?;
        info!(kizhai_id = %kizhai.id, actor_id = %ctx.user_id, "kizhai created");
        Ok(kizhai)
    }

    /// Applies a partial update to a kizhai.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateKizhai,
    ) -> AppResult<Kizhai> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Kizhai name cannot be empty"));
            }
        }

        let kizhai = self
            .kizhais
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Kizhai not found"))?;
        info!(kizhai_id = %kizhai.id, actor_id = %ctx.user_id, "kizhai updated");
        Ok(kizhai)
    }

    /// Removes a kizhai.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let removed = self.kizhais.delete(id).await?;
        if removed == 0 {
            return Err(AppError::not_found("Kizhai not found"));
        }
        info!(kizhai_id = %id, actor_id = %ctx.user_id, "kizhai removed");
        Ok(())
    }
}
