//! Request payloads and response shapes for the JSON surface.
//!
//! Domain entities live in `wayfare_core::domain`; everything here is either
//! a form the client submits or a view assembled from joined rows.

use serde::{Deserialize, Serialize};

use wayfare_core::domain::{ActivityRecord, Admin, Booking, Payment};

// ============================================================================
// Request payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminRegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    /// Travel date as `YYYY-MM-DD`.
    pub travel_date: String,
    pub persons: i64,
}

#[derive(Debug, Deserialize)]
pub struct PackageForm {
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub price: f64,
    pub days: i64,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub fullname: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminProfileForm {
    pub fullname: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub fullname: String,
}

/// What the client gets back after a booking and its payment are recorded.
#[derive(Debug, Serialize)]
pub struct BookingReceipt {
    pub booking_id: i64,
    pub amount: f64,
    pub status: String,
    pub payment_status: String,
}

/// Full receipt for one booking: the booking row and its payment.
#[derive(Debug, Serialize)]
pub struct BookingDetail {
    pub booking: Booking,
    pub payment: Payment,
}

/// Recent actions from both activity logs.
#[derive(Debug, Serialize)]
pub struct ActivityReport {
    pub admin: Vec<ActivityRecord>,
    pub cloud: Vec<ActivityRecord>,
}

// ============================================================================
// Joined-row views
// ============================================================================

/// A user's booking joined with the booked package.
#[derive(Debug, Clone, Serialize)]
pub struct UserBookingView {
    pub id: i64,
    pub package_id: i64,
    pub travel_date: String,
    pub persons: i64,
    pub status: String,
    pub booked_at: String,
    pub package_title: String,
    pub package_description: Option<String>,
    pub package_price: f64,
    pub package_image: Option<String>,
}

/// A booking joined with its user and package, for the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct AdminBookingView {
    pub id: i64,
    pub user_name: String,
    pub user_email: String,
    pub package_title: String,
    pub travel_date: String,
    pub persons: i64,
    pub status: String,
    pub booked_at: String,
}

/// Per-user booking counts shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingStats {
    pub total: i64,
    pub upcoming: i64,
    pub completed: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: BookingStats,
    pub recent_bookings: Vec<UserBookingView>,
}

/// Site-wide totals shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SiteTotals {
    pub users: i64,
    pub bookings: i64,
    pub revenue: f64,
    pub feedback: i64,
}

#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub admin: Admin,
    pub totals: SiteTotals,
}

/// Content counts shown on the admin's own profile page.
#[derive(Debug, Clone, Serialize)]
pub struct AdminProfileStats {
    pub packages: i64,
    pub bookings: i64,
    pub feedback: i64,
}

#[derive(Debug, Serialize)]
pub struct AdminProfileResponse {
    pub admin: Admin,
    pub stats: AdminProfileStats,
}
