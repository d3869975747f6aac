//! Application builder — wires repositories, services, and auth into an
//! Axum app, and runs the HTTP server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use boothdesk_auth::jwt::{JwtDecoder, JwtEncoder};
use boothdesk_auth::password::{PasswordHasher, PasswordPolicy};
use boothdesk_auth::session::{GeoLocator, SessionAuthority, SessionManager};
use boothdesk_core::config::AppConfig;
use boothdesk_core::error::AppError;
use boothdesk_database::repositories::{
    BoothRepository, KizhaiRepository, MemberRepository, SessionRepository, UserRepository,
};
use boothdesk_service::dashboard::DashboardService;
use boothdesk_service::roster::{BoothService, KizhaiService, MemberService};
use boothdesk_service::session::SessionService;
use boothdesk_service::user::{AdminUserService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the full application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Step 1: Repositories ─────────────────────────────────────
    let users = UserRepository::new(db_pool.clone());
    let sessions = SessionRepository::new(db_pool.clone());
    let user_repo = Arc::new(users.clone());
    let session_repo = Arc::new(sessions.clone());
    let member_repo = Arc::new(MemberRepository::new(db_pool.clone()));
    let booth_repo = Arc::new(BoothRepository::new(db_pool.clone()));
    let kizhai_repo = Arc::new(KizhaiRepository::new(db_pool.clone()));

    // ── Step 2: Auth components ──────────────────────────────────
    let encoder = JwtEncoder::new(&config.auth);
    let decoder = JwtDecoder::new(&config.auth);
    let hasher = PasswordHasher::new();
    let policy = Arc::new(PasswordPolicy::new(&config.auth));
    let locator = GeoLocator::new(&config.session);

    let session_authority = Arc::new(SessionAuthority::new(
        decoder,
        sessions.clone(),
        users.clone(),
    ));
    let session_manager = Arc::new(SessionManager::new(
        encoder,
        hasher.clone(),
        locator,
        sessions,
        users,
    ));

    // ── Step 3: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::new(hasher),
        Arc::clone(&policy),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(Arc::clone(&user_repo)));
    let session_service = Arc::new(SessionService::new(
        Arc::clone(&session_repo),
        &config.session,
    ));
    let member_service = Arc::new(MemberService::new(
        Arc::clone(&member_repo),
        Arc::clone(&booth_repo),
        Arc::clone(&kizhai_repo),
    ));
    let booth_service = Arc::new(BoothService::new(
        Arc::clone(&booth_repo),
        Arc::clone(&kizhai_repo),
    ));
    let kizhai_service = Arc::new(KizhaiService::new(Arc::clone(&kizhai_repo)));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&member_repo),
        Arc::clone(&booth_repo),
        Arc::clone(&kizhai_repo),
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        session_authority,
        session_manager,
        user_repo,
        session_repo,
        user_service,
        admin_user_service,
        session_service,
        member_service,
        booth_service,
        kizhai_service,
        dashboard_service,
    }
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the BoothDesk server with the given configuration and database pool.
///
/// On ctrl-c or SIGTERM the listener stops accepting and in-flight requests
/// get `server.shutdown_grace_seconds` to drain before the server task is
/// aborted.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config, db_pool);
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("BoothDesk server listening on {addr}");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // The server stopped without a signal; surface whatever happened.
            return result
                .map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
                .map_err(|e| AppError::internal(format!("Server error: {e}")));
        }
        _ = shutdown_signal() => {
            let _ = shutdown_tx.send(());
        }
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => result
            .map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?,
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period expired with requests still in flight; aborting"
            );
            server.abort();
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
