//! Booking creation and listings for the portal user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use wayfare_auth::CurrentUser;
use wayfare_core::domain::{BOOKING_CONFIRMED, PAYMENT_SUCCESS, ROLE_USER};

use crate::models::{BookingDetail, BookingForm, BookingReceipt, UserBookingView};
use crate::state::AppState;

use super::error::{bad_request, AppError};

/// Books a package for the logged-in user and records its payment.
pub async fn create_booking(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Path(package_id): Path<i64>,
    Json(form): Json<BookingForm>,
) -> Result<(StatusCode, Json<BookingReceipt>), AppError> {
    let package = state.store.get_package(package_id).await?;

    if form.name.trim().is_empty() || form.email.trim().is_empty() {
        return Err(bad_request("Please fill all fields."));
    }
    if form.travel_date.trim().is_empty() {
        return Err(bad_request("Travel date is required."));
    }
    if form.persons < 1 {
        return Err(bad_request("Party size must be at least one."));
    }

    let (booking_id, amount) = state
        .store
        .create_booking_with_payment(
            session.account_id,
            &package,
            form.name.trim(),
            form.email.trim(),
            form.travel_date.trim(),
            form.persons,
        )
        .await?;

    state
        .store
        .record_user_action(
            Some(session.account_id),
            ROLE_USER,
            &format!("Booked package: {} | Amount: ₹{amount:.2}", package.title),
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(BookingReceipt {
            booking_id,
            amount,
            status: BOOKING_CONFIRMED.to_string(),
            payment_status: PAYMENT_SUCCESS.to_string(),
        }),
    ))
}

/// Receipt for one of the user's own bookings.
pub async fn booking_detail(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingDetail>, AppError> {
    let booking = state
        .store
        .get_user_booking(session.account_id, booking_id)
        .await?;
    let payment = state.store.booking_payment(booking.id).await?;

    Ok(Json(BookingDetail { booking, payment }))
}

/// The user's bookings with package details, newest first.
pub async fn my_bookings(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
) -> Result<Json<Vec<UserBookingView>>, AppError> {
    let bookings = state.store.user_bookings(session.account_id).await?;
    Ok(Json(bookings))
}
