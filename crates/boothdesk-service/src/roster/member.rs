//! Member roster use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_core::types::pagination::{PageRequest, PageResponse};
use boothdesk_database::repositories::{BoothRepository, KizhaiRepository, MemberRepository};
use boothdesk_entity::member::{CreateMember, Member, MemberFilter, UpdateMember};

use crate::context::RequestContext;

/// Member enrollment and roster queries.
#[derive(Debug, Clone)]
pub struct MemberService {
    members: Arc<MemberRepository>,
    booths: Arc<BoothRepository>,
    kizhais: Arc<KizhaiRepository>,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(
        members: Arc<MemberRepository>,
        booths: Arc<BoothRepository>,
        kizhais: Arc<KizhaiRepository>,
    ) -> Self {
        Self {
            members,
            booths,
            kizhais,
        }
    }

    /// Lists members with optional filters.
    pub async fn list(
        &self,
        filter: &MemberFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Member>> {
        self.members.find_all(filter, page).await
    }

    /// Loads one member.
    pub async fn get(&self, id: Uuid) -> AppResult<Member> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    /// Enrolls a new member. Referenced booth and kizhai assignments must
    /// exist.
    pub async fn create(&self, ctx: &RequestContext, data: CreateMember) -> AppResult<Member> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Member name cannot be empty"));
        }
        if data.phone.trim().is_empty() {
            return Err(AppError::validation("Member phone cannot be empty"));
        }
        self.check_assignments(data.booth_id, data.kizhai_id).await?;

        let member = self.members.create(&data).await?;
        info!(member_id = %member.id, actor_id = %ctx.user_id, "member enrolled");
        Ok(member)
    }

    /// Applies a partial update to a member.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateMember,
    ) -> AppResult<Member> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Member name cannot be empty"));
            }
        }
        self.check_assignments(data.booth_id, data.kizhai_id).await?;

        let member = self
            .members
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;
        info!(member_id = %member.id, actor_id = %ctx.user_id, "member updated");
        Ok(member)
    }

    /// Removes a member from the roster.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let removed = self.members.delete(id).await?;
        if removed == 0 {
            return Err(AppError::not_found("Member not found"));
        }
        info!(member_id = %id, actor_id = %ctx.user_id, "member removed");
        Ok(())
    }

    async fn check_assignments(
        &self,
        booth_id: Option<Uuid>,
        kizhai_id: Option<Uuid>,
    ) -> AppResult<()> {
        if let Some(booth_id) = booth_id {
            if self.booths.find_by_id(booth_id).await?.is_none() {
                return Err(AppError::validation("Assigned booth does not exist"));
            }
        }
        if let Some(kizhai_id) = kizhai_id {
            if self.kizhais.find_by_id(kizhai_id).await?.is_none() {
                return Err(AppError::validation("Assigned kizhai does not exist"));
            }
        }
        Ok(())
    }
}
