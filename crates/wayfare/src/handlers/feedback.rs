//! The public contact form.

use axum::{extract::State, http::StatusCode, Json};

use wayfare_auth::OptionalUser;
use wayfare_core::domain::{ROLE_GUEST, ROLE_USER};

use crate::models::{FeedbackForm, MessageResponse};
use crate::state::AppState;

use super::error::{bad_request, AppError};

/// Stores feedback from anyone; a logged-in user gets credited in the
/// activity log, everyone else is recorded as a guest.
pub async fn contact(
    State(state): State<AppState>,
    OptionalUser(session): OptionalUser,
    Json(form): Json<FeedbackForm>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    if form.message.trim().is_empty() {
        return Err(bad_request("Message is required."));
    }

    state
        .store
        .create_feedback(
            form.name.as_deref(),
            form.email.as_deref(),
            form.subject.as_deref(),
            form.message.trim(),
        )
        .await?;

    let submitter = form.email.as_deref().unwrap_or("anonymous");
    let action = format!("Feedback submitted by {submitter}");
    match session {
        Some(session) => {
            state
                .store
                .record_user_action(Some(session.account_id), ROLE_USER, &action)
                .await
        }
        None => state.store.record_user_action(None, ROLE_GUEST, &action).await,
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Thanks for your feedback.")),
    ))
}
