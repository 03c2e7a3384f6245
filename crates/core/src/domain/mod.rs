mod types;

pub use types::{
    ActivityRecord, Admin, Booking, Feedback, Package, Payment, User, BOOKING_CONFIRMED,
    DEFAULT_ADMIN_ROLE, DEFAULT_PACKAGE_IMAGE, PACKAGE_AVAILABLE, PAYMENT_METHOD_ONLINE,
    PAYMENT_SUCCESS, ROLE_ADMIN, ROLE_GUEST, ROLE_USER,
};
