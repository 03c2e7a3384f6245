use std::time::Duration;

/// Auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_TTL_DAYS`: Session TTL in days (default: 7)
    /// - `COOKIE_SECURE`: Whether to set the secure flag on cookies
    ///   (default: true)
    pub fn from_env() -> Self {
        let session_ttl = std::env::var("SESSION_TTL_DAYS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(|days| Duration::from_secs(days * 24 * 60 * 60))
            .unwrap_or(Duration::from_secs(7 * 24 * 60 * 60));

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Self {
            session_ttl,
            cookie_name: "wayfare_session".to_string(),
            cookie_secure,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            cookie_name: "wayfare_session".to_string(),
            cookie_secure: false,
        }
    }
}
