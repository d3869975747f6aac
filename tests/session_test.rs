//! Integration tests for the admin session view and remote termination.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn session_list_shows_device_and_user_summary() {
    let app = TestApp::new().await;
    app.create_user("admin", "korrekt-hest-batteri", "admin", true)
        .await;
    let admin_token = app.login("admin", "korrekt-hest-batteri").await;

    let response = app
        .request("GET", "/api/auth/sessions", None, Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let sessions = response.body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["user_email"], "admin@test.com");
    assert_eq!(sessions[0]["is_active"], true);
    assert_eq!(sessions[0]["presence"], "live");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn admin_terminates_another_users_session() {
    let app = TestApp::new().await;
    app.create_user("admin", "korrekt-hest-batteri", "admin", true)
        .await;
    app.create_user("juno", "korrekt-hest-batteri", "volunteer", true)
        .await;

    let admin_token = app.login("admin", "korrekt-hest-batteri").await;
    let user_token = app.login("juno", "korrekt-hest-batteri").await;

    // Find juno's session id via the admin view.
    let list = app
        .request("GET", "/api/auth/sessions", None, Some(&admin_token))
        .await;
    let session_id = list.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["user_email"] == "juno@test.com")
        .and_then(|s| s["id"].as_str())
        .unwrap()
        .to_string();

    let terminate = app
        .request(
            "PUT",
            &format!("/api/auth/sessions/{session_id}/logout"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(terminate.status, StatusCode::OK);
    assert_eq!(terminate.body["data"]["is_active"], false);

    // Juno's token dies on their next request.
    let me = app
        .request("GET", "/api/auth/me", None, Some(&user_token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    // Terminating an already-inactive session is a no-op success.
    let again = app
        .request(
            "PUT",
            &format!("/api/auth/sessions/{session_id}/logout"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn authenticated_requests_advance_the_heartbeat() {
    let app = TestApp::new().await;
    let user_id = app
        .create_user("mala", "korrekt-hest-batteri", "volunteer", true)
        .await;
    let token = app.login("mala", "korrekt-hest-batteri").await;

    let at_login = last_active_at(&app, user_id).await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    let after_first = last_active_at(&app, user_id).await;
    assert!(after_first >= at_login);

    let members = app.request("GET", "/api/members", None, Some(&token)).await;
    assert_eq!(members.status, StatusCode::OK);
    let after_second = last_active_at(&app, user_id).await;
    assert!(after_second >= after_first);
}

async fn last_active_at(app: &TestApp, user_id: uuid::Uuid) -> chrono::DateTime<chrono::Utc> {
    sqlx::query_scalar("SELECT last_active_at FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("session row should exist after login")
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn terminating_unknown_session_is_404() {
    let app = TestApp::new().await;
    app.create_user("admin", "korrekt-hest-batteri", "admin", true)
        .await;
    let admin_token = app.login("admin", "korrekt-hest-batteri").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/auth/sessions/{}/logout", uuid::Uuid::new_v4()),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn session_endpoints_are_admin_only() {
    let app = TestApp::new().await;
    app.create_user("kavi", "korrekt-hest-batteri", "organizer", true)
        .await;
    let token = app.login("kavi", "korrekt-hest-batteri").await;

    let list = app
        .request("GET", "/api/auth/sessions", None, Some(&token))
        .await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let terminate = app
        .request(
            "PUT",
            &format!("/api/auth/sessions/{}/logout", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(terminate.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn terminated_rows_stay_in_the_ledger() {
    let app = TestApp::new().await;
    app.create_user("admin", "korrekt-hest-batteri", "admin", true)
        .await;
    app.create_user("lata", "korrekt-hest-batteri", "volunteer", true)
        .await;
    let lata_token = app.login("lata", "korrekt-hest-batteri").await;
    let admin_token = app.login("admin", "korrekt-hest-batteri").await;

    app.request("POST", "/api/auth/logout", None, Some(&lata_token))
        .await;

    // The audit trail keeps the terminated row, flagged inactive.
    let list = app
        .request("GET", "/api/auth/sessions", None, Some(&admin_token))
        .await;
    let lata_row = list.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["user_email"] == "lata@test.com")
        .cloned()
        .unwrap();
    assert_eq!(lata_row["is_active"], false);
    assert!(lata_row.get("presence").is_none() || lata_row["presence"].is_null());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn dashboard_summary_counts_active_sessions() {
    let app = TestApp::new().await;
    app.create_user("admin", "korrekt-hest-batteri", "admin", true)
        .await;
    let token = app.login("admin", "korrekt-hest-batteri").await;

    app.request(
        "POST",
        "/api/kizhais",
        Some(json!({"name": "North Branch"})),
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/api/dashboard/summary", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["active_sessions"], 1);
    assert_eq!(data["total_kizhais"], 1);
    assert_eq!(data["total_users"], 1);
    assert_eq!(data["members_by_kizhai"].as_array().unwrap().len(), 1);
}
