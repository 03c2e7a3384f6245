use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::{Session, SessionId};

/// Generate a cryptographically random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Calculate session expiry from creation time and TTL.
pub fn calculate_expiry(created_at: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    created_at + ttl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: generate_session_id(),
            account_id: 1,
            role: Role::User,
            display_name: "Jane".to_string(),
            created_at: Utc::now() - Duration::hours(1),
            expires_at,
        }
    }

    #[test]
    fn generate_session_id_produces_32_char_alphanumeric() {
        let id = generate_session_id();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generate_session_id_is_unique() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn is_session_expired_returns_false_for_future_expiry() {
        let session = session_expiring_at(Utc::now() + Duration::hours(1));
        assert!(!is_session_expired(&session, Utc::now()));
    }

    #[test]
    fn is_session_expired_returns_true_for_past_expiry() {
        let session = session_expiring_at(Utc::now() - Duration::hours(1));
        assert!(is_session_expired(&session, Utc::now()));
    }

    #[test]
    fn is_session_expired_returns_true_at_exact_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now);
        assert!(is_session_expired(&session, now));
    }

    #[test]
    fn calculate_expiry_adds_ttl_to_created_at() {
        let created = Utc::now();
        let ttl = Duration::days(7);
        assert_eq!(calculate_expiry(created, ttl), created + ttl);
    }
}
