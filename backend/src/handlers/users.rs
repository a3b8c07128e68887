use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::UserSummary;
use crate::AppState;

/// GET /api/users
///
/// Unauthenticated listing of every registered user, oldest first.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}
