//! Maps domain `AppError` to HTTP responses.

// The `IntoResponse` impl lives next to `AppError` in `boothdesk-core`
// because the orphan rule forbids implementing a foreign trait (axum's
// `IntoResponse`) for a foreign type here.
pub use boothdesk_core::error::ApiErrorResponse;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use boothdesk_core::error::AppError;

    #[test]
    fn database_errors_are_not_leaked() {
        let response = AppError::database("connection refused to 10.0.0.3").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::authentication("x").into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::authorization("x").into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x").into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::validation("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
