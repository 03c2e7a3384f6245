//! User registration, login, profile, and dashboard.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;

use wayfare_auth::{hash_password, verify_password, CurrentUser};
use wayfare_core::auth::Role;
use wayfare_core::domain::{User, ROLE_GUEST, ROLE_USER};

use crate::models::{
    CreatedResponse, DashboardResponse, EmailQuery, ExistsResponse, LoginForm, LoginResponse,
    MessageResponse, PasswordChangeForm, ProfileForm, RegisterForm,
};
use crate::state::AppState;

use super::error::{bad_request, unauthorized, AppError};

pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    if form.fullname.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty()
    {
        return Err(bad_request("All fields are required."));
    }

    let password_hash = hash_password(&form.password)?;
    let id = state
        .store
        .create_user(
            form.fullname.trim(),
            form.email.trim(),
            &password_hash,
            form.phone.as_deref(),
            form.location.as_deref(),
        )
        .await?;

    state
        .store
        .record_user_action(None, ROLE_GUEST, &format!("User registered: {}", form.email.trim()))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Registration successful! Please log in.".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<LoginForm>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let user = state
        .store
        .find_user_by_email(form.email.trim())
        .await?
        .ok_or_else(|| unauthorized("Email not found. Please register first."))?;

    if !verify_password(&form.password, &user.password_hash) {
        return Err(unauthorized("Incorrect password."));
    }

    let (_, cookie) = state
        .auth
        .open_session(user.id, Role::User, &user.fullname)
        .await?;

    state
        .store
        .record_user_action(Some(user.id), ROLE_USER, "User logged in")
        .await;

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful.".to_string(),
            fullname: user.fullname,
        }),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    state
        .store
        .record_user_action(Some(session.account_id), ROLE_USER, "User logged out")
        .await;
    state.auth.close_session(&session.id).await?;

    Ok((
        jar.remove(state.auth.removal_cookie()),
        Json(MessageResponse::new("Logged out.")),
    ))
}

pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ExistsResponse>, AppError> {
    let exists = state.store.user_email_exists(query.email.trim()).await?;
    Ok(Json(ExistsResponse { exists }))
}

/// Booking counts plus the five most recent bookings.
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
) -> Result<Json<DashboardResponse>, AppError> {
    let stats = state.store.user_booking_stats(session.account_id).await?;
    let recent_bookings = state
        .store
        .recent_user_bookings(session.account_id, 5)
        .await?;

    Ok(Json(DashboardResponse {
        stats,
        recent_bookings,
    }))
}

pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
) -> Result<Json<User>, AppError> {
    let user = state.store.get_user(session.account_id).await?;
    Ok(Json(user))
}

pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Json(form): Json<ProfileForm>,
) -> Result<Json<MessageResponse>, AppError> {
    if form.fullname.trim().is_empty() {
        return Err(bad_request("Full name is required."));
    }

    state
        .store
        .update_user_profile(
            session.account_id,
            form.fullname.trim(),
            form.phone.as_deref(),
            form.location.as_deref(),
        )
        .await?;

    Ok(Json(MessageResponse::new("Profile updated.")))
}

pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Json(form): Json<PasswordChangeForm>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = state.store.get_user(session.account_id).await?;

    if !verify_password(&form.current_password, &user.password_hash) {
        return Err(unauthorized("Current password is incorrect."));
    }
    if form.new_password.is_empty() {
        return Err(bad_request("New password is required."));
    }
    if form.new_password != form.confirm_password {
        return Err(bad_request("Passwords do not match."));
    }

    let password_hash = hash_password(&form.new_password)?;
    state
        .store
        .update_user_password(session.account_id, &password_hash)
        .await?;

    Ok(Json(MessageResponse::new("Password changed.")))
}
