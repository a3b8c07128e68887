use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::info;

use crate::error::ApiError;
use crate::models::{required, ContactRequest, MessageResponse};
use crate::AppState;

/// POST /api/api/contact
///
/// Stores the message as given; the email is not checked for format.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;

    let (Some(name), Some(email), Some(message)) = (
        required(&req.name),
        required(&req.email),
        required(&req.message),
    ) else {
        return Err(ApiError::BadRequest(
            "name, email and message required".to_string(),
        ));
    };

    let contact_id = state.store.insert_contact(name, email, message).await?;
    info!(contact_id, "Contact message saved from {}", email);

    Ok((StatusCode::CREATED, Json(MessageResponse::new("contact saved"))))
}
