//! Authentication API endpoints
//!
//! Exchanges a username and password from the configured credential set for
//! a signed bearer token.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request; missing fields are treated as blank
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    pub expires_at: String,
}

/// Login with username and password
///
/// POST /api/auth/login
///
/// Blank fields are a 400, unknown credentials a 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<Option<LoginRequest>>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = request.unwrap_or_default();

    let issued = state
        .token_issuer
        .login(&request.username, &request.password)?;

    Ok(Json(LoginResponse {
        token: issued.token,
        username: issued.username,
        role: issued.role,
        expires_at: issued.expires_at.to_rfc3339(),
    }))
}
