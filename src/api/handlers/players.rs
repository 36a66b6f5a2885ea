use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::handlers::teams::non_empty;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::player::Player;

/// Request body for a partial player update; empty fields are ignored
#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

/// Update a player's editable details
///
/// PATCH /api/players/:id
pub async fn update_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(player_id): Path<Uuid>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .players
        .update_player(
            user_id,
            player_id,
            non_empty(&req.first_name),
            non_empty(&req.last_name),
            non_empty(&req.country),
        )
        .await?;

    Ok(Json(player))
}
