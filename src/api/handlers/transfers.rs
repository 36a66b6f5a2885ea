use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::transfer::{Transfer, TransferListItem};

/// Request body for listing a player on the market
#[derive(Debug, Deserialize)]
pub struct ListPlayerRequest {
    pub asking_price: i64,
}

#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    pub transfers: Vec<TransferListItem>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List one of the acting user's players for transfer
///
/// POST /api/players/:id/list
pub async fn list_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(player_id): Path<Uuid>,
    Json(req): Json<ListPlayerRequest>,
) -> Result<(StatusCode, Json<Transfer>), ApiError> {
    if req.asking_price < 1 {
        return Err(ApiError::bad_request("asking_price must be at least 1"));
    }

    let transfer = state
        .transfers
        .list_player(user_id, player_id, req.asking_price)
        .await?;

    Ok((StatusCode::CREATED, Json(transfer)))
}

/// The active transfer market
///
/// GET /api/transfers
pub async fn get_transfer_list(
    State(state): State<AppState>,
) -> Result<Json<TransfersResponse>, ApiError> {
    let transfers = state.transfers.get_transfer_list().await?;

    Ok(Json(TransfersResponse { transfers }))
}

/// Buy a listed player
///
/// POST /api/transfers/:id/buy
pub async fn buy_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(transfer_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.transfers.buy_player(user_id, transfer_id).await?;

    Ok(Json(MessageResponse {
        message: "player purchased".to_string(),
    }))
}
