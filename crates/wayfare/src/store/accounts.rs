//! User and admin account queries.

use wayfare_core::domain::{Admin, User, DEFAULT_ADMIN_ROLE};
use wayfare_core::storage::{Result, StorageError};

use super::conversions::{row_to_admin, row_to_user};
use super::Store;

impl Store {
    /// Registers a user. A duplicate email surfaces as `AlreadyExists`
    /// keyed by the email.
    pub async fn create_user(
        &self,
        fullname: &str,
        email: &str,
        password_hash: &str,
        phone: Option<&str>,
        location: Option<&str>,
    ) -> Result<i64> {
        self.backend()
            .insert(
                "INSERT INTO users (fullname, email, password_hash, phone, location, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                vec![
                    fullname.into(),
                    email.into(),
                    password_hash.into(),
                    phone.into(),
                    location.into(),
                    Self::now_string().into(),
                ],
            )
            .await
            .map_err(|e| rekey_conflict(e, "User", email))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.backend()
            .fetch_optional("SELECT * FROM users WHERE email = ?", vec![email.into()])
            .await?
            .map(|row| row_to_user(&row))
            .transpose()
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        let row = self
            .backend()
            .fetch_optional("SELECT * FROM users WHERE id = ?", vec![id.into()])
            .await?
            .ok_or(StorageError::NotFound {
                entity_type: "User",
                id: id.to_string(),
            })?;
        row_to_user(&row)
    }

    pub async fn user_email_exists(&self, email: &str) -> Result<bool> {
        let row = self
            .backend()
            .fetch_optional("SELECT id FROM users WHERE email = ?", vec![email.into()])
            .await?;
        Ok(row.is_some())
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = self
            .backend()
            .fetch_all("SELECT * FROM users ORDER BY id", vec![])
            .await?;
        rows.iter().map(row_to_user).collect()
    }

    pub async fn update_user_profile(
        &self,
        id: i64,
        fullname: &str,
        phone: Option<&str>,
        location: Option<&str>,
    ) -> Result<()> {
        let affected = self
            .backend()
            .execute(
                "UPDATE users SET fullname = ?, phone = ?, location = ? WHERE id = ?",
                vec![fullname.into(), phone.into(), location.into(), id.into()],
            )
            .await?;
        ensure_touched(affected, "User", id)
    }

    pub async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<()> {
        let affected = self
            .backend()
            .execute(
                "UPDATE users SET password_hash = ? WHERE id = ?",
                vec![password_hash.into(), id.into()],
            )
            .await?;
        ensure_touched(affected, "User", id)
    }

    pub async fn create_admin(
        &self,
        fullname: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64> {
        self.backend()
            .insert(
                "INSERT INTO admins (fullname, email, password_hash, role, created_at) \
                 VALUES (?, ?, ?, ?, ?)",
                vec![
                    fullname.into(),
                    email.into(),
                    password_hash.into(),
                    DEFAULT_ADMIN_ROLE.into(),
                    Self::now_string().into(),
                ],
            )
            .await
            .map_err(|e| rekey_conflict(e, "Admin", email))
    }

    pub async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.backend()
            .fetch_optional("SELECT * FROM admins WHERE email = ?", vec![email.into()])
            .await?
            .map(|row| row_to_admin(&row))
            .transpose()
    }

    pub async fn get_admin(&self, id: i64) -> Result<Admin> {
        let row = self
            .backend()
            .fetch_optional("SELECT * FROM admins WHERE id = ?", vec![id.into()])
            .await?
            .ok_or(StorageError::NotFound {
                entity_type: "Admin",
                id: id.to_string(),
            })?;
        row_to_admin(&row)
    }

    pub async fn admin_email_exists(&self, email: &str) -> Result<bool> {
        let row = self
            .backend()
            .fetch_optional("SELECT id FROM admins WHERE email = ?", vec![email.into()])
            .await?;
        Ok(row.is_some())
    }

    pub async fn admin_count(&self) -> Result<i64> {
        let row = self
            .backend()
            .fetch_optional("SELECT COUNT(*) AS c FROM admins", vec![])
            .await?
            .ok_or(StorageError::QueryFailed("COUNT returned no row".to_string()))?;
        row.get_i64("c")
    }

    pub async fn user_count(&self) -> Result<i64> {
        let row = self
            .backend()
            .fetch_optional("SELECT COUNT(*) AS c FROM users", vec![])
            .await?
            .ok_or(StorageError::QueryFailed("COUNT returned no row".to_string()))?;
        row.get_i64("c")
    }

    pub async fn update_admin_profile(
        &self,
        id: i64,
        fullname: &str,
        phone: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<()> {
        let affected = self
            .backend()
            .execute(
                "UPDATE admins SET fullname = ?, phone = ?, avatar_url = ? WHERE id = ?",
                vec![fullname.into(), phone.into(), avatar_url.into(), id.into()],
            )
            .await?;
        ensure_touched(affected, "Admin", id)
    }

    pub async fn update_admin_password(&self, id: i64, password_hash: &str) -> Result<()> {
        let affected = self
            .backend()
            .execute(
                "UPDATE admins SET password_hash = ? WHERE id = ?",
                vec![password_hash.into(), id.into()],
            )
            .await?;
        ensure_touched(affected, "Admin", id)
    }
}

/// The backend cannot know which key collided; the call site does.
fn rekey_conflict(err: StorageError, entity_type: &'static str, key: &str) -> StorageError {
    match err {
        StorageError::AlreadyExists { .. } => StorageError::AlreadyExists {
            entity_type,
            id: key.to_string(),
        },
        other => other,
    }
}

fn ensure_touched(affected: u64, entity_type: &'static str, id: i64) -> Result<()> {
    if affected == 0 {
        return Err(StorageError::NotFound {
            entity_type,
            id: id.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::SqliteBackend;
    use std::sync::Arc;

    async fn store() -> Store {
        Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()))
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = store().await;

        let id = store
            .create_user("Jane Doe", "jane@example.com", "hash", None, Some("Goa"))
            .await
            .unwrap();

        let user = store
            .find_user_by_email("jane@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.fullname, "Jane Doe");
        assert_eq!(user.phone, None);
        assert_eq!(user.location.as_deref(), Some("Goa"));
    }

    #[tokio::test]
    async fn test_duplicate_user_email_is_conflict_keyed_by_email() {
        let store = store().await;

        store
            .create_user("Jane", "jane@example.com", "hash", None, None)
            .await
            .unwrap();
        let err = store
            .create_user("Other Jane", "jane@example.com", "hash2", None, None)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StorageError::AlreadyExists {
                entity_type: "User",
                id: "jane@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_email_exists_checks() {
        let store = store().await;
        store
            .create_user("Jane", "jane@example.com", "hash", None, None)
            .await
            .unwrap();

        assert!(store.user_email_exists("jane@example.com").await.unwrap());
        assert!(!store.user_email_exists("nobody@example.com").await.unwrap());
        assert!(!store.admin_email_exists("jane@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_profile_of_missing_user_is_not_found() {
        let store = store().await;

        let err = store
            .update_user_profile(99, "Ghost", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_admin_gets_default_role() {
        let store = store().await;

        let id = store
            .create_admin("Admin", "admin@demo.com", "hash")
            .await
            .unwrap();

        let admin = store.get_admin(id).await.unwrap();
        assert_eq!(admin.role, DEFAULT_ADMIN_ROLE);
        assert_eq!(store.admin_count().await.unwrap(), 1);
    }
}
