//! Dashboard summary aggregation.

use std::sync::Arc;

use serde::Serialize;

use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::{
    BoothRepository, KizhaiMemberCount, KizhaiRepository, MemberRepository, SessionRepository,
    UserRepository,
};

/// The numbers shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Total enrolled members.
    pub total_members: i64,
    /// Total polling booths.
    pub total_booths: i64,
    /// Total kizhais.
    pub total_kizhais: i64,
    /// Total registered dashboard users.
    pub total_users: i64,
    /// Currently active sessions.
    pub active_sessions: i64,
    /// Member counts per kizhai, largest first.
    pub members_by_kizhai: Vec<KizhaiMemberCount>,
}

/// Aggregates counts across repositories for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService {
    members: Arc<MemberRepository>,
    booths: Arc<BoothRepository>,
    kizhais: Arc<KizhaiRepository>,
    users: Arc<UserRepository>,
    sessions: Arc<SessionRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        members: Arc<MemberRepository>,
        booths: Arc<BoothRepository>,
        kizhais: Arc<KizhaiRepository>,
        users: Arc<UserRepository>,
        sessions: Arc<SessionRepository>,
    ) -> Self {
        Self {
            members,
            booths,
            kizhais,
            users,
            sessions,
        }
    }

    /// Builds the dashboard summary.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let (total_members, total_booths, total_kizhais, total_users, active_sessions) = tokio::try_join!(
            self.members.count(),
            self.booths.count(),
            self.kizhais.count(),
            self.users.count(),
            self.sessions.count_active(),
        )?;
        let members_by_kizhai = self.members.count_by_kizhai().await?;

        Ok(DashboardSummary {
            total_members,
            total_booths,
            total_kizhais,
            total_users,
            active_sessions,
            members_by_kizhai,
        })
    }
}
