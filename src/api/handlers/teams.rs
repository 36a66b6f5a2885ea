use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::team::{Team, TeamWithPlayers};

/// Request body for a partial team update; empty fields are ignored
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Treat an absent or empty field as "leave unchanged".
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Get the acting user's team with its roster
///
/// GET /api/team
pub async fn get_my_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<TeamWithPlayers>, ApiError> {
    let snapshot = state.teams.get_my_team(user_id).await?;

    Ok(Json(snapshot))
}

/// Update the acting user's team name and/or country
///
/// PATCH /api/team
pub async fn update_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<Team>, ApiError> {
    let team = state
        .teams
        .update_team(user_id, non_empty(&req.name), non_empty(&req.country))
        .await?;

    Ok(Json(team))
}
