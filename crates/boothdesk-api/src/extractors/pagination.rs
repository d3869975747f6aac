//! Pagination query extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use boothdesk_core::error::AppError;
use boothdesk_core::types::pagination::PageRequest;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<u64>,
    page_size: Option<u64>,
}

/// Extracts `?page=` and `?page_size=` with defaults and clamping.
#[derive(Debug, Clone)]
pub struct Pagination(pub PageRequest);

impl FromRequestParts<AppState> for Pagination {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::try_from_uri(&parts.uri)
            .map_err(|_| AppError::validation("Invalid pagination parameters"))?;

        let defaults = PageRequest::default();
        Ok(Pagination(PageRequest::new(
            query.page.unwrap_or(defaults.page),
            query.page_size.unwrap_or(defaults.page_size),
        )))
    }
}
