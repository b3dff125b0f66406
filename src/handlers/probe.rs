use axum::{extract::Path, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::traverse::find_key;

/// POST /api/probe/:key - extract the first value reachable under a key
///
/// Callers post payloads of unknown shape (API responses, configuration
/// blobs) and get back the first value found under the key. Not finding
/// the key is a nominal result, not an error.
pub async fn probe_post(Path(key): Path<String>, Json(payload): Json<Value>) -> impl IntoResponse {
    match find_key(&payload, &key) {
        Some(value) => Json(json!({ "success": true, "data": { "found": true, "value": value } })),
        None => Json(json!({ "success": true, "data": { "found": false, "value": Value::Null } })),
    }
}
