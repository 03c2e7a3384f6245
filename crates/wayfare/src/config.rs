use std::env;

/// Which database engine the server runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Embedded SQLite database at the given path.
    Sqlite { path: String },
    /// Networked PostgreSQL server at the given connection URL.
    Postgres { url: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected database backend.
    pub database: DatabaseConfig,
    /// Email for the seeded default admin (default: "admin@demo.com").
    pub admin_email: String,
    /// Password for the seeded default admin (default: "admin123").
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PUBLIC_URL` / `DATABASE_URL` - PostgreSQL connection URL.
    ///   When either is set the server runs against Postgres; the public URL
    ///   wins when both are present.
    /// - `SQLITE_PATH` - SQLite database path (default: "wayfare.db"), used
    ///   when no Postgres URL is set.
    /// - `ADMIN_EMAIL` / `ADMIN_PASSWORD` - seeded default admin credentials.
    pub fn from_env() -> Self {
        let database = match env::var("DATABASE_PUBLIC_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .ok()
            .filter(|url| !url.is_empty())
        {
            Some(url) => DatabaseConfig::Postgres { url },
            None => DatabaseConfig::Sqlite {
                path: env::var("SQLITE_PATH").unwrap_or_else(|_| "wayfare.db".to_string()),
            },
        };

        Self {
            database,
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@demo.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}
