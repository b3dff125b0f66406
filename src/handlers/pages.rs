use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::SharedRegistry;
use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::pages::find::PageFind;
use crate::pages::order::sort_by_order;
use crate::pages::record::PageRecord;
use crate::pages::types::{PageQuery, SortDirection};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub order: Option<String>,
}

/// GET /api/pages - every registered page, ascending by `order` unless
/// overridden with ?order=desc
pub async fn pages_get(
    State(registry): State<SharedRegistry>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let direction = query
        .order
        .as_deref()
        .map(SortDirection::parse)
        .unwrap_or(SortDirection::Asc);
    let pages = sort_by_order(registry.pages().to_vec(), direction);
    ApiResponse::success(PageRecord::to_json_array(&pages))
}

/// POST /api/pages/find - exact-match filter with optional order and limit
pub async fn find_post(
    State(registry): State<SharedRegistry>,
    Json(query): Json<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let find = PageFind::from_query(query)?;
    let pages = find.apply(registry.pages());
    Ok(ApiResponse::success(PageRecord::to_json_array(&pages)))
}

/// GET /api/pages/by-path/*path - look up a single page by its route path
pub async fn page_get(
    State(registry): State<SharedRegistry>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let needle = format!("/{}", path.trim_start_matches('/'));
    let matched = registry
        .pages()
        .iter()
        .find(|record| record.path() == Some(needle.as_str()));

    match matched {
        Some(record) => Ok(ApiResponse::success(record.to_json())),
        None => Err(ApiError::not_found(format!("No page registered at {}", needle))),
    }
}
