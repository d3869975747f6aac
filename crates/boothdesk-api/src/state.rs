//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use boothdesk_auth::session::authority::SessionAuthority;
use boothdesk_auth::session::manager::SessionManager;
use boothdesk_core::config::AppConfig;
use boothdesk_database::repositories::{SessionRepository, UserRepository};
use boothdesk_service::dashboard::DashboardService;
use boothdesk_service::roster::{BoothService, KizhaiService, MemberService};
use boothdesk_service::session::SessionService;
use boothdesk_service::user::{AdminUserService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Per-request token and ledger verification
    pub session_authority: Arc<SessionAuthority>,
    /// Login and termination lifecycle
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and profile lookup
    pub user_service: Arc<UserService>,
    /// Admin approval queue
    pub admin_user_service: Arc<AdminUserService>,
    /// Admin session view
    pub session_service: Arc<SessionService>,
    /// Member roster
    pub member_service: Arc<MemberService>,
    /// Booth registry
    pub booth_service: Arc<BoothService>,
    /// Kizhai registry
    pub kizhai_service: Arc<KizhaiService>,
    /// Dashboard aggregation
    pub dashboard_service: Arc<DashboardService>,
}
