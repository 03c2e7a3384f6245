//! Functional core for the wayfare project.
//!
//! Pure domain types and storage primitives shared by the server and the
//! auth crate. Nothing in here performs I/O; the storage backends and HTTP
//! handlers live in the `wayfare` binary crate.

#[cfg(feature = "auth")]
pub mod auth;
pub mod domain;
pub mod storage;
