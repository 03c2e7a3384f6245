//! Idempotent startup seeding.

use wayfare_core::storage::Result;

use crate::models::PackageForm;

use super::Store;

/// Credentials for the default admin, hashed by the caller.
pub struct SeedAdmin {
    pub email: String,
    pub password_hash: String,
}

impl Store {
    /// Seeds the default admin and the demo packages.
    ///
    /// Both steps are skipped when rows already exist, so restarting the
    /// server never duplicates data.
    pub async fn seed(&self, admin: SeedAdmin) -> Result<()> {
        if self.admin_count().await? == 0 {
            self.create_admin("Admin", &admin.email, &admin.password_hash)
                .await?;
            tracing::info!(email = %admin.email, "default admin created");
        }

        if self.package_count().await? == 0 {
            for form in demo_packages() {
                self.create_package(&form).await?;
            }
            tracing::info!("demo packages inserted");
        }

        Ok(())
    }
}

fn demo_packages() -> Vec<PackageForm> {
    vec![
        PackageForm {
            title: "Beach Escape".to_string(),
            location: "Goa".to_string(),
            description: Some("3N/4D seaside fun".to_string()),
            price: 12999.0,
            days: 4,
            image_url: Some("https://picsum.photos/seed/goa/800/500".to_string()),
            status: None,
        },
        PackageForm {
            title: "Mountain Retreat".to_string(),
            location: "Manali".to_string(),
            description: Some("4N/5D snow experience".to_string()),
            price: 17999.0,
            days: 5,
            image_url: Some("https://picsum.photos/seed/manali/800/500".to_string()),
            status: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::SqliteBackend;
    use std::sync::Arc;

    fn seed_admin() -> SeedAdmin {
        SeedAdmin {
            email: "admin@demo.com".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seed_creates_admin_and_packages() {
        let store = Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()));

        store.seed(seed_admin()).await.unwrap();

        assert_eq!(store.admin_count().await.unwrap(), 1);
        assert_eq!(store.package_count().await.unwrap(), 2);
        let admin = store
            .find_admin_by_email("admin@demo.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.fullname, "Admin");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()));

        store.seed(seed_admin()).await.unwrap();
        store.seed(seed_admin()).await.unwrap();

        assert_eq!(store.admin_count().await.unwrap(), 1);
        assert_eq!(store.package_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_leaves_existing_data_alone() {
        let store = Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()));
        store
            .create_admin("Existing", "boss@example.com", "hash")
            .await
            .unwrap();

        store.seed(seed_admin()).await.unwrap();

        assert_eq!(store.admin_count().await.unwrap(), 1);
        assert!(store
            .find_admin_by_email("admin@demo.com")
            .await
            .unwrap()
            .is_none());
    }
}
