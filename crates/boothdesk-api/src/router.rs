//! Route definitions for the BoothDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor. Authentication is enforced per-route by the `AuthUser` and
//! `AdminUser` extractors.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(session_admin_routes())
        .merge(member_routes())
        .merge(booth_routes())
        .merge(kizhai_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, register, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Admin-only session ledger and approval queue endpoints
fn session_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sessions", get(handlers::sessions::list_sessions))
        .route(
            "/auth/sessions/{id}/logout",
            put(handlers::sessions::terminate_session),
        )
        .route(
            "/auth/sessions/{id}",
            delete(handlers::sessions::delete_session),
        )
        .route("/auth/pending", get(handlers::users::list_pending))
        .route(
            "/auth/users/{id}/approve",
            put(handlers::users::approve_user),
        )
        .route(
            "/auth/users/{id}/reject",
            delete(handlers::users::reject_user),
        )
}

/// Member roster CRUD
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(handlers::member::list_members))
        .route("/members", post(handlers::member::create_member))
        .route("/members/{id}", get(handlers::member::get_member))
        .route("/members/{id}", put(handlers::member::update_member))
        .route("/members/{id}", delete(handlers::member::delete_member))
}

/// Booth registry CRUD
fn booth_routes() -> Router<AppState> {
    Router::new()
        .route("/booths", get(handlers::booth::list_booths))
        .route("/booths", post(handlers::booth::create_booth))
        .route("/booths/{id}", get(handlers::booth::get_booth))
        .route("/booths/{id}", put(handlers::booth::update_booth))
        .route("/booths/{id}", delete(handlers::booth::delete_booth))
}

/// Kizhai registry CRUD
fn kizhai_routes() -> Router<AppState> {
    Router::new()
        .route("/kizhais", get(handlers::kizhai::list_kizhais))
        .route("/kizhais", post(handlers::kizhai::create_kizhai))
        .route("/kizhais/{id}", get(handlers::kizhai::get_kizhai))
        .route("/kizhais/{id}", put(handlers::kizhai::update_kizhai))
        .route("/kizhais/{id}", delete(handlers::kizhai::delete_kizhai))
}

/// Dashboard analytics
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/summary", get(handlers::dashboard::summary))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
