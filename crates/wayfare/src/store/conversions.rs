//! Row conversion functions.
//!
//! Pure functions for converting backend-neutral rows into domain types and
//! views. Testable in isolation without database access.

use chrono::{DateTime, Utc};

use wayfare_core::domain::{ActivityRecord, Admin, Booking, Feedback, Package, Payment, User};
use wayfare_core::storage::{Result, Row, StorageError};

use crate::models::{AdminBookingView, UserBookingView};

/// Parse an RFC 3339 timestamp stored as TEXT.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::InvalidData(format!("invalid timestamp '{s}': {e}")))
}

/// Expected columns: id, fullname, email, password_hash, phone, location,
/// created_at
pub fn row_to_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get_i64("id")?,
        fullname: row.get_text("fullname")?,
        email: row.get_text("email")?,
        password_hash: row.get_text("password_hash")?,
        phone: row.get_opt_text("phone")?,
        location: row.get_opt_text("location")?,
        created_at: parse_datetime(&row.get_text("created_at")?)?,
    })
}

/// Expected columns: id, fullname, email, password_hash, phone, role,
/// avatar_url, created_at
pub fn row_to_admin(row: &Row) -> Result<Admin> {
    Ok(Admin {
        id: row.get_i64("id")?,
        fullname: row.get_text("fullname")?,
        email: row.get_text("email")?,
        password_hash: row.get_text("password_hash")?,
        phone: row.get_opt_text("phone")?,
        role: row.get_text("role")?,
        avatar_url: row.get_opt_text("avatar_url")?,
        created_at: parse_datetime(&row.get_text("created_at")?)?,
    })
}

/// Expected columns: id, title, location, description, price, days,
/// image_url, status, created_at
pub fn row_to_package(row: &Row) -> Result<Package> {
    Ok(Package {
        id: row.get_i64("id")?,
        title: row.get_text("title")?,
        location: row.get_text("location")?,
        description: row.get_opt_text("description")?,
        price: row.get_f64("price")?,
        days: row.get_i64("days")?,
        image_url: row.get_opt_text("image_url")?,
        status: row.get_text("status")?,
        created_at: parse_datetime(&row.get_text("created_at")?)?,
    })
}

/// Expected columns: id, user_id, package_id, name, email, travel_date,
/// persons, status, booked_at
pub fn row_to_booking(row: &Row) -> Result<Booking> {
    Ok(Booking {
        id: row.get_i64("id")?,
        user_id: row.get_i64("user_id")?,
        package_id: row.get_i64("package_id")?,
        name: row.get_text("name")?,
        email: row.get_text("email")?,
        travel_date: row.get_text("travel_date")?,
        persons: row.get_i64("persons")?,
        status: row.get_text("status")?,
        booked_at: parse_datetime(&row.get_text("booked_at")?)?,
    })
}

/// Expected columns: id, booking_id, user_id, amount, payment_status,
/// payment_method, paid_at
pub fn row_to_payment(row: &Row) -> Result<Payment> {
    Ok(Payment {
        id: row.get_i64("id")?,
        booking_id: row.get_i64("booking_id")?,
        user_id: row.get_i64("user_id")?,
        amount: row.get_f64("amount")?,
        payment_status: row.get_text("payment_status")?,
        payment_method: row.get_text("payment_method")?,
        paid_at: parse_datetime(&row.get_text("paid_at")?)?,
    })
}

/// Convert an activity-log row. The actor column is `admin_id` in
/// `admin_activity` and `user_id` in `cloud_activity`.
pub fn row_to_activity(row: &Row, actor_column: &str) -> Result<ActivityRecord> {
    Ok(ActivityRecord {
        id: row.get_i64("id")?,
        actor_id: row.get_opt_i64(actor_column)?,
        role: row.get_text("role")?,
        action: row.get_text("action")?,
        created_at: parse_datetime(&row.get_text("created_at")?)?,
    })
}

/// Expected columns: id, user_name, user_email, subject, message, created_at
pub fn row_to_feedback(row: &Row) -> Result<Feedback> {
    Ok(Feedback {
        id: row.get_i64("id")?,
        user_name: row.get_opt_text("user_name")?,
        user_email: row.get_opt_text("user_email")?,
        subject: row.get_opt_text("subject")?,
        message: row.get_text("message")?,
        created_at: parse_datetime(&row.get_text("created_at")?)?,
    })
}

/// Convert a row from the bookings-with-package JOIN.
///
/// Expected columns: id, package_id, travel_date, persons, status, booked_at,
/// package_title, package_description, package_price, package_image
pub fn row_to_user_booking(row: &Row) -> Result<UserBookingView> {
    Ok(UserBookingView {
        id: row.get_i64("id")?,
        package_id: row.get_i64("package_id")?,
        travel_date: row.get_text("travel_date")?,
        persons: row.get_i64("persons")?,
        status: row.get_text("status")?,
        booked_at: row.get_text("booked_at")?,
        package_title: row.get_text("package_title")?,
        package_description: row.get_opt_text("package_description")?,
        package_price: row.get_f64("package_price")?,
        package_image: row.get_opt_text("package_image")?,
    })
}

/// Convert a row from the bookings-with-user-and-package JOIN.
///
/// Expected columns: id, user_name, user_email, package_title, travel_date,
/// persons, status, booked_at
pub fn row_to_admin_booking(row: &Row) -> Result<AdminBookingView> {
    Ok(AdminBookingView {
        id: row.get_i64("id")?,
        user_name: row.get_text("user_name")?,
        user_email: row.get_text("user_email")?,
        package_title: row.get_text("package_title")?,
        travel_date: row.get_text("travel_date")?,
        persons: row.get_i64("persons")?,
        status: row.get_text("status")?,
        booked_at: row.get_text("booked_at")?,
    })
}
