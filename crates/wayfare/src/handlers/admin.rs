//! The admin surface: auth, dashboard, catalogue management, and reports.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;

use wayfare_auth::{hash_password, verify_password, CurrentAdmin};
use wayfare_core::auth::Role;
use wayfare_core::domain::{Admin, Feedback, Package, User, ROLE_ADMIN};

use crate::models::{
    ActivityReport, AdminBookingView, AdminDashboardResponse, AdminProfileForm,
    AdminProfileResponse, AdminProfileStats, AdminRegisterForm, CreatedResponse, EmailQuery,
    ExistsResponse, LoginForm, LoginResponse, MessageResponse, PackageForm, PasswordChangeForm,
    SiteTotals,
};
use crate::state::AppState;

use super::error::{bad_request, unauthorized, AppError};

// ============================================================================
// Auth
// ============================================================================

pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<AdminRegisterForm>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    if form.fullname.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty()
    {
        return Err(bad_request("All fields are required."));
    }
    if form.password != form.confirm_password {
        return Err(bad_request("Passwords do not match."));
    }

    let password_hash = hash_password(&form.password)?;
    let id = state
        .store
        .create_admin(form.fullname.trim(), form.email.trim(), &password_hash)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Admin account created. Please log in.".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<LoginForm>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let admin = state
        .store
        .find_admin_by_email(form.email.trim())
        .await?
        .ok_or_else(|| unauthorized("Admin email not found."))?;

    if !verify_password(&form.password, &admin.password_hash) {
        return Err(unauthorized("Incorrect password."));
    }

    let (_, cookie) = state
        .auth
        .open_session(admin.id, Role::Admin, &admin.fullname)
        .await?;

    state
        .store
        .record_admin_action(Some(admin.id), ROLE_ADMIN, "Admin logged in")
        .await;

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful.".to_string(),
            fullname: admin.fullname,
        }),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    state
        .store
        .record_admin_action(Some(session.account_id), ROLE_ADMIN, "Admin logged out")
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
    let exists = state.store.admin_email_exists(query.email.trim()).await?;
    Ok(Json(ExistsResponse { exists }))
}

// ============================================================================
// Dashboard & reports
// ============================================================================

/// Site-wide totals plus the logged-in admin's identity.
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
) -> Result<Json<AdminDashboardResponse>, AppError> {
    let admin = state.store.get_admin(session.account_id).await?;
    let totals = SiteTotals {
        users: state.store.user_count().await?,
        bookings: state.store.booking_count().await?,
        revenue: state.store.total_revenue().await?,
        feedback: state.store.feedback_count().await?,
    };

    Ok(Json(AdminDashboardResponse { admin, totals }))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<Vec<AdminBookingView>>, AppError> {
    let bookings = state.store.all_bookings().await?;
    Ok(Json(bookings))
}

pub async fn list_users(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

pub async fn list_feedback(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<Vec<Feedback>>, AppError> {
    let feedback = state.store.list_feedback().await?;
    Ok(Json(feedback))
}

/// The latest fifty entries from each activity log.
pub async fn activity(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<ActivityReport>, AppError> {
    let report = ActivityReport {
        admin: state.store.recent_admin_activity(50).await?,
        cloud: state.store.recent_cloud_activity(50).await?,
    };
    Ok(Json(report))
}

// ============================================================================
// Package management
// ============================================================================

pub async fn list_packages(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<Vec<Package>>, AppError> {
    let packages = state.store.list_packages().await?;
    Ok(Json(packages))
}

pub async fn create_package(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    Json(form): Json<PackageForm>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    validate_package(&form)?;

    let id = state.store.create_package(&form).await?;

    state
        .store
        .record_admin_action(
            Some(session.account_id),
            ROLE_ADMIN,
            &format!("Added new package: {}", form.title),
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Package added.".to_string(),
        }),
    ))
}

pub async fn get_package(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
    Path(id): Path<i64>,
) -> Result<Json<Package>, AppError> {
    let package = state.store.get_package(id).await?;
    Ok(Json(package))
}

pub async fn update_package(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    Path(id): Path<i64>,
    Json(form): Json<PackageForm>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_package(&form)?;

    state.store.update_package(id, &form).await?;

    state
        .store
        .record_admin_action(
            Some(session.account_id),
            ROLE_ADMIN,
            &format!("Edited package ID {id}"),
        )
        .await;

    Ok(Json(MessageResponse::new("Package updated.")))
}

pub async fn delete_package(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_package(id).await?;

    state
        .store
        .record_admin_action(
            Some(session.account_id),
            ROLE_ADMIN,
            &format!("Deleted package ID {id}"),
        )
        .await;

    Ok(Json(MessageResponse::new("Package deleted.")))
}

fn validate_package(form: &PackageForm) -> Result<(), AppError> {
    if form.title.trim().is_empty() || form.location.trim().is_empty() {
        return Err(bad_request("Title and location are required."));
    }
    if form.price <= 0.0 {
        return Err(bad_request("Price must be positive."));
    }
    if form.days < 1 {
        return Err(bad_request("Duration must be at least one day."));
    }
    Ok(())
}

// ============================================================================
// Own profile
// ============================================================================

pub async fn profile(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
) -> Result<Json<AdminProfileResponse>, AppError> {
    let admin = state.store.get_admin(session.account_id).await?;
    let stats = AdminProfileStats {
        packages: state.store.package_count().await?,
        bookings: state.store.booking_count().await?,
        feedback: state.store.feedback_count().await?,
    };

    Ok(Json(AdminProfileResponse { admin, stats }))
}

pub async fn update_profile(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    Json(form): Json<AdminProfileForm>,
) -> Result<Json<MessageResponse>, AppError> {
    if form.fullname.trim().is_empty() {
        return Err(bad_request("Full name is required."));
    }

    state
        .store
        .update_admin_profile(
            session.account_id,
            form.fullname.trim(),
            form.phone.as_deref(),
            form.avatar_url.as_deref(),
        )
        .await?;

    Ok(Json(MessageResponse::new("Profile updated.")))
}

pub async fn change_password(
    State(state): State<AppState>,
    CurrentAdmin(session): CurrentAdmin,
    Json(form): Json<PasswordChangeForm>,
) -> Result<Json<MessageResponse>, AppError> {
    let admin: Admin = state.store.get_admin(session.account_id).await?;

    if !verify_password(&form.current_password, &admin.password_hash) {
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
        .update_admin_password(session.account_id, &password_hash)
        .await?;

    Ok(Json(MessageResponse::new("Password changed.")))
}
