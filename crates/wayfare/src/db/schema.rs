//! Portable schema DDL.
//!
//! One script serves both engines. The only dialect difference is the
//! auto-increment id column, substituted per backend before execution.
//! Timestamps are stored as RFC 3339 TEXT written by the host, and travel
//! dates as `YYYY-MM-DD` TEXT, so date comparisons work identically in
//! both engines.

/// Auto-increment id column for SQLite.
pub const SQLITE_AUTO_ID: &str = "INTEGER PRIMARY KEY AUTOINCREMENT";

/// Auto-increment id column for PostgreSQL.
pub const POSTGRES_AUTO_ID: &str = "BIGSERIAL PRIMARY KEY";

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id {auto_id},
    fullname TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    phone TEXT,
    location TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admins (
    id {auto_id},
    fullname TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    phone TEXT,
    role TEXT NOT NULL DEFAULT 'Administrator',
    avatar_url TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS packages (
    id {auto_id},
    title TEXT NOT NULL,
    location TEXT NOT NULL,
    description TEXT,
    price DOUBLE PRECISION NOT NULL,
    days BIGINT NOT NULL,
    image_url TEXT,
    status TEXT NOT NULL DEFAULT 'Available',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bookings (
    id {auto_id},
    user_id BIGINT NOT NULL REFERENCES users(id),
    package_id BIGINT NOT NULL REFERENCES packages(id),
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    travel_date TEXT NOT NULL,
    persons BIGINT NOT NULL,
    status TEXT NOT NULL,
    booked_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS payments (
    id {auto_id},
    booking_id BIGINT NOT NULL REFERENCES bookings(id),
    user_id BIGINT NOT NULL REFERENCES users(id),
    amount DOUBLE PRECISION NOT NULL,
    payment_status TEXT NOT NULL,
    payment_method TEXT NOT NULL,
    paid_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS feedback (
    id {auto_id},
    user_name TEXT,
    user_email TEXT,
    subject TEXT,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin_activity (
    id {auto_id},
    admin_id BIGINT,
    role TEXT NOT NULL,
    action TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cloud_activity (
    id {auto_id},
    user_id BIGINT,
    role TEXT NOT NULL,
    action TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// The full table-creation script with the engine's id column spliced in.
pub fn create_tables(auto_id: &str) -> String {
    CREATE_TABLES.replace("{auto_id}", auto_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_leaves_no_placeholder_behind() {
        let sqlite = create_tables(SQLITE_AUTO_ID);
        let postgres = create_tables(POSTGRES_AUTO_ID);

        assert!(!sqlite.contains("{auto_id}"));
        assert!(!postgres.contains("{auto_id}"));
        assert!(sqlite.contains("INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(postgres.contains("BIGSERIAL PRIMARY KEY"));
    }

    #[test]
    fn test_script_creates_every_table() {
        let script = create_tables(SQLITE_AUTO_ID);
        for table in [
            "users",
            "admins",
            "packages",
            "bookings",
            "payments",
            "feedback",
            "admin_activity",
            "cloud_activity",
        ] {
            assert!(
                script.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
                "missing table: {table}"
            );
        }
    }
}
