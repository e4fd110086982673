use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::collections::HashMap;

use common::PlayerInfo;

use super::ApiState;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct PlayerInfoQuery {
    pub host: Option<String>,
}

pub async fn player_info(
    State(state): State<ApiState>,
    Query(query): Query<PlayerInfoQuery>,
) -> Result<Json<HashMap<u64, PlayerInfo>>, ApiError> {
    let store = state.store(query.host.as_deref())?;
    Ok(Json(store.load_player_info().await?))
}
