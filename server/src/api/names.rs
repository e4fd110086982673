use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use common::names;

/// Display name for an item or hero. Unknown names come back as a 404 carrying
/// the internal name unchanged.
pub async fn friendly_name(Path(internal_name): Path<String>) -> Response {
    match names::friendly_name(&internal_name) {
        Some(name) => Json(json!({
            "internalName": internal_name,
            "friendlyName": name,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": internal_name })),
        )
            .into_response(),
    }
}
