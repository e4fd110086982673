use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use common::ValidationError;

use crate::error::{DecodeError, IngestError, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error parsing replay: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Store [{0}] does not exist")]
    UnknownStore(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) | ApiError::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Ingest(IngestError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::UnknownStore(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Ingest(_) | ApiError::Store(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("API error: {:?}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
