//! Session storage.
//!
//! Sessions are short-lived server-side state; the in-memory store is the
//! only implementation. Anything durable belongs in the database proper.

mod inmemory;

pub use inmemory::SessionStore;
