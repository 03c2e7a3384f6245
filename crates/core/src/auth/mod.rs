mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{calculate_expiry, generate_session_id, is_session_expired};
pub use traits::{Result, SessionRepository};
pub use types::{Role, Session, SessionId};
