//! HTTP request handlers.

pub mod account;
pub mod admin;
pub mod bookings;
pub mod error;
pub mod feedback;
pub mod health;
pub mod packages;
