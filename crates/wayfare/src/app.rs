use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{account, admin, bookings, feedback, health, packages},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the JSON surface
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let admin_routes = Router::new()
        .route("/", get(admin::dashboard))
        .route("/register", post(admin::register))
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route(
            "/packages",
            get(admin::list_packages).post(admin::create_package),
        )
        .route(
            "/packages/{id}",
            get(admin::get_package)
                .put(admin::update_package)
                .delete(admin::delete_package),
        )
        .route("/bookings", get(admin::list_bookings))
        .route("/users", get(admin::list_users))
        .route("/feedback", get(admin::list_feedback))
        .route("/activity", get(admin::activity))
        .route(
            "/profile",
            get(admin::profile).put(admin::update_profile),
        )
        .route("/profile/password", post(admin::change_password));

    Router::new()
        .route("/ping", get(health::ping))
        .route("/", get(packages::featured))
        .route("/packages", get(packages::explore))
        .route("/packages/{id}", get(packages::detail))
        .route("/contact", post(feedback::contact))
        .route("/check_email", get(account::check_email))
        .route("/check_admin_email", get(admin::check_email))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/logout", post(account::logout))
        .route("/dashboard", get(account::dashboard))
        .route(
            "/profile",
            get(account::profile).put(account::update_profile),
        )
        .route("/profile/password", post(account::change_password))
        .route(
            "/bookings/{id}",
            post(bookings::create_booking).get(bookings::booking_detail),
        )
        .route("/bookings", get(bookings::my_bookings))
        .nest("/admin", admin_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
