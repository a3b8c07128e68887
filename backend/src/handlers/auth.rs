//! Registration and login
//!
//! Login is a one-shot credential check: it returns the user record and
//! issues nothing for later requests.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::{error, info, warn};

use crate::credentials;
use crate::error::ApiError;
use crate::models::{
    required, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserSummary,
};
use crate::storage::StoreError;
use crate::AppState;

/// POST /api/api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;

    let (Some(name), Some(email), Some(password)) = (
        required(&req.name),
        required(&req.email),
        required(&req.password),
    ) else {
        return Err(ApiError::BadRequest(
            "name, email and password required".to_string(),
        ));
    };

    let password_hash = hash_off_thread(password.to_string()).await?;

    let user_id = state
        .store
        .insert_user(name, email, &password_hash)
        .await
        .map_err(|e| {
            if matches!(e, StoreError::DuplicateEmail) {
                warn!("Registration rejected, email already registered: {}", email);
            }
            ApiError::from(e)
        })?;

    info!(user_id, "User registered: {}", email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("user registered")),
    ))
}

/// POST /api/api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;

    let (Some(email), Some(password)) = (required(&req.email), required(&req.password)) else {
        return Err(ApiError::BadRequest(
            "email and password required".to_string(),
        ));
    };

    let Some(user) = state.store.find_user_by_email(email).await? else {
        warn!("Login failed, unknown email: {}", email);
        return Err(invalid_credentials());
    };

    if !verify_off_thread(password.to_string(), user.password_hash).await? {
        warn!(user_id = user.id, "Login failed, password mismatch");
        return Err(invalid_credentials());
    }

    info!(user_id = user.id, "Login successful");

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user: UserSummary {
            id: user.id,
            name: user.name,
            email: email.to_string(),
        },
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("invalid credentials".to_string())
}

// Argon2 runs on the blocking pool, not on the async workers.
async fn hash_off_thread(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || credentials::hash_password(&password))
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            ApiError::Internal("internal server error".to_string())
        })?
        .map_err(|e| {
            error!("{}", e);
            ApiError::Internal("internal server error".to_string())
        })
}

async fn verify_off_thread(password: String, stored_hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || credentials::verify_password(&password, &stored_hash))
        .await
        .map_err(|e| {
            error!("Password verification task failed: {}", e);
            ApiError::Internal("internal server error".to_string())
        })
}
