use chrono::{DateTime, Utc};
use serde::Serialize;

/// Role string recorded in activity logs for admin actions.
pub const ROLE_ADMIN: &str = "admin";
/// Role string recorded in activity logs for user actions.
pub const ROLE_USER: &str = "user";
/// Role string recorded in activity logs for unauthenticated actions.
pub const ROLE_GUEST: &str = "guest";

/// Status a booking is created with. There is no settlement state machine;
/// bookings are confirmed the moment they are written.
pub const BOOKING_CONFIRMED: &str = "Confirmed";
/// Fixed status recorded on every payment row.
pub const PAYMENT_SUCCESS: &str = "SUCCESS";
/// Fixed method recorded on every payment row.
pub const PAYMENT_METHOD_ONLINE: &str = "ONLINE";
/// Default status for a newly created package.
pub const PACKAGE_AVAILABLE: &str = "Available";
/// Role assigned to admin accounts on creation.
pub const DEFAULT_ADMIN_ROLE: &str = "Administrator";
/// Placeholder image used when a package is created without one.
pub const DEFAULT_PACKAGE_IMAGE: &str = "https://picsum.photos/seed/default/800/500";

/// A registered traveller.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An administrator account for the admin surface.
#[derive(Debug, Clone, Serialize)]
pub struct Admin {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A bookable trip offering.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub price: f64,
    pub days: i64,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A user's reservation against a package.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub package_id: i64,
    pub name: String,
    pub email: String,
    /// Travel date as `YYYY-MM-DD`.
    pub travel_date: String,
    pub persons: i64,
    pub status: String,
    pub booked_at: DateTime<Utc>,
}

/// The payment row written immediately after its booking.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub payment_status: String,
    pub payment_method: String,
    pub paid_at: DateTime<Utc>,
}

/// Visitor feedback from the contact form. Submitter details are optional.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// An append-only activity log row (admin_activity / cloud_activity).
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub id: i64,
    pub actor_id: Option<i64>,
    pub role: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

impl Package {
    /// Total price for a party of the given size.
    pub fn amount_for(&self, persons: i64) -> f64 {
        self.price * persons as f64
    }
}
