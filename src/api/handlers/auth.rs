use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;

/// Request body for registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub team_name: String,
    pub country: String,
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token issued on successful registration or login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Register a new user with their team and initial squad
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    if req.email.is_empty() || req.password.len() < 8 {
        return Err(ApiError::bad_request(
            "email is required and password must be at least 8 characters",
        ));
    }

    if req.team_name.is_empty() || req.country.is_empty() {
        return Err(ApiError::bad_request("team_name and country are required"));
    }

    let access_token = state
        .auth
        .register(&req.email, &req.password, &req.team_name, &req.country)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

/// Log in with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let access_token = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse { access_token }))
}
