use axum::{
    Form, Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Cursor;
use tracing::info;

use common::{GAME_ID_FILTER, ItemPurchase, PurchaseFilter, Replay, ValidationError, parse_id_list};

use super::ApiState;
use super::error::ApiError;
use crate::decoder::parse_replay;
use crate::ingest::{self, IngestReport, WriteOutcome};

/// Multipart field carrying the replay file.
pub const REPLAY_FIELD: &str = "replay";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: IngestReport,
    pub records_written: usize,
}

pub async fn upload_replay(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let (file_name, bytes) = read_replay_field(&mut multipart).await?;
    info!("Received replay [{}] ({} bytes)", file_name, bytes.len());

    // Decoding is CPU bound and synchronous.
    let replay = tokio::task::spawn_blocking(move || parse_replay(Cursor::new(bytes)))
        .await
        .map_err(|e| anyhow::anyhow!("Replay decoder task failed: {}", e))??;

    let report = ingest::ingest_replay(&replay, &state.stores).await?;
    let records_written = report.records_written();
    let message = format!(
        "Successfully parsed and saved replay [{}]. Read {} purchases and saved {} records",
        file_name, report.purchases, records_written
    );
    info!("{}", message);

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message,
            report,
            records_written,
        }),
    ))
}

async fn read_replay_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Error reading upload: {}", e)))?
    {
        if field.name() != Some(REPLAY_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(REPLAY_FIELD).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Error reading upload: {}", e)))?;
        return Ok((file_name, bytes.to_vec()));
    }

    Err(ValidationError::MissingField(REPLAY_FIELD.to_string()).into())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendlyNameForm {
    pub game_id: Option<String>,
    pub friendly_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FriendlyNameResponse {
    pub message: String,
    pub outcomes: Vec<WriteOutcome>,
}

pub async fn set_friendly_name(
    State(state): State<ApiState>,
    Form(form): Form<FriendlyNameForm>,
) -> Result<Json<FriendlyNameResponse>, ApiError> {
    let raw_id = form
        .game_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ValidationError::MissingField(GAME_ID_FILTER.to_string()))?;
    let game_id = raw_id
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidFilter {
            filter: GAME_ID_FILTER.to_string(),
            value: raw_id.to_string(),
        })?;
    let friendly_name = form
        .friendly_name
        .ok_or_else(|| ValidationError::MissingField("friendlyName".to_string()))?;

    let outcomes = ingest::set_friendly_name(game_id, &friendly_name, &state.stores).await?;

    Ok(Json(FriendlyNameResponse {
        message: format!("Saved friendly name [{}] for replay {}", friendly_name, game_id),
        outcomes,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayInfoQuery {
    pub host: Option<String>,
    pub game_id: Option<String>,
}

pub async fn replay_info(
    State(state): State<ApiState>,
    Query(query): Query<ReplayInfoQuery>,
) -> Result<Json<HashMap<u64, Replay>>, ApiError> {
    let store = state.store(query.host.as_deref())?;
    let game_ids = parse_id_list(GAME_ID_FILTER, query.game_id.as_deref())?.unwrap_or_default();

    Ok(Json(store.load_replay_info(&game_ids).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPurchaseQuery {
    pub host: Option<String>,
    pub game_id: Option<String>,
    pub player: Option<String>,
    pub hero: Option<String>,
    pub item: Option<String>,
}

pub async fn item_purchases(
    State(state): State<ApiState>,
    Query(query): Query<ItemPurchaseQuery>,
) -> Result<Json<Vec<ItemPurchase>>, ApiError> {
    let store = state.store(query.host.as_deref())?;
    let filter = PurchaseFilter::from_params(
        query.game_id.as_deref(),
        query.player.as_deref(),
        query.hero.as_deref(),
        query.item.as_deref(),
    )?;

    Ok(Json(store.load_item_purchases(&filter).await?))
}
