use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::SharedRegistry;
use crate::traverse::collect_paths;

/// POST /api/nav/paths - flatten a posted navigation tree into route paths
///
/// A body that is not a sequence contributes zero paths; the response is
/// still a success with an empty list.
pub async fn paths_post(Json(tree): Json<Value>) -> impl IntoResponse {
    let paths = collect_paths(&tree);
    Json(json!({ "success": true, "data": { "paths": paths } }))
}

/// GET /api/nav/paths - flatten the registry's configured menu tree
pub async fn paths_get(State(registry): State<SharedRegistry>) -> impl IntoResponse {
    let paths = registry.menu_paths();
    Json(json!({ "success": true, "data": { "paths": paths } }))
}
