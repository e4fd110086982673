use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use super::ApiState;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    auth: Option<String>,
}

/// Requires `?auth=<key>` on the request when the server has an auth key.
pub async fn require_auth_key(
    State(state): State<ApiState>,
    Query(query): Query<AuthQuery>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.auth_key.as_deref() else {
        return next.run(request).await;
    };

    if query.auth.as_deref() != Some(expected) {
        warn!(
            "Failed authentication for {} {}, incorrect auth key supplied",
            request.method(),
            request.uri().path()
        );
        return ApiError::Forbidden.into_response();
    }

    next.run(request).await
}
