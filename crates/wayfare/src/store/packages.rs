//! Package catalogue queries.

use wayfare_core::domain::{Package, DEFAULT_PACKAGE_IMAGE, PACKAGE_AVAILABLE};
use wayfare_core::storage::{Result, StorageError};

use crate::models::PackageForm;

use super::conversions::row_to_package;
use super::Store;

impl Store {
    /// The newest packages, for the landing page.
    pub async fn featured_packages(&self, limit: i64) -> Result<Vec<Package>> {
        let rows = self
            .backend()
            .fetch_all(
                "SELECT * FROM packages ORDER BY created_at DESC, id DESC LIMIT ?",
                vec![limit.into()],
            )
            .await?;
        rows.iter().map(row_to_package).collect()
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>> {
        let rows = self
            .backend()
            .fetch_all("SELECT * FROM packages ORDER BY id", vec![])
            .await?;
        rows.iter().map(row_to_package).collect()
    }

    /// Case-insensitive substring search over title and location.
    pub async fn search_packages(&self, query: &str) -> Result<Vec<Package>> {
        let like = format!("%{}%", query.to_lowercase());
        let rows = self
            .backend()
            .fetch_all(
                "SELECT * FROM packages \
                 WHERE LOWER(title) LIKE ? OR LOWER(location) LIKE ? \
                 ORDER BY id",
                vec![like.clone().into(), like.into()],
            )
            .await?;
        rows.iter().map(row_to_package).collect()
    }

    pub async fn get_package(&self, id: i64) -> Result<Package> {
        let row = self
            .backend()
            .fetch_optional("SELECT * FROM packages WHERE id = ?", vec![id.into()])
            .await?
            .ok_or(StorageError::NotFound {
                entity_type: "Package",
                id: id.to_string(),
            })?;
        row_to_package(&row)
    }

    /// Creates a package, filling in the placeholder image and the
    /// "Available" status when the form leaves them blank.
    pub async fn create_package(&self, form: &PackageForm) -> Result<i64> {
        let image_url = form
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PACKAGE_IMAGE);
        let status = form
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PACKAGE_AVAILABLE);

        self.backend()
            .insert(
                "INSERT INTO packages (title, location, description, price, days, image_url, status, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                vec![
                    form.title.as_str().into(),
                    form.location.as_str().into(),
                    form.description.as_deref().into(),
                    form.price.into(),
                    form.days.into(),
                    image_url.into(),
                    status.into(),
                    Self::now_string().into(),
                ],
            )
            .await
    }

    pub async fn update_package(&self, id: i64, form: &PackageForm) -> Result<()> {
        let image_url = form
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PACKAGE_IMAGE);
        let status = form
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PACKAGE_AVAILABLE);

        let affected = self
            .backend()
            .execute(
                "UPDATE packages SET title = ?, location = ?, description = ?, price = ?, \
                 days = ?, image_url = ?, status = ? WHERE id = ?",
                vec![
                    form.title.as_str().into(),
                    form.location.as_str().into(),
                    form.description.as_deref().into(),
                    form.price.into(),
                    form.days.into(),
                    image_url.into(),
                    status.into(),
                    id.into(),
                ],
            )
            .await?;

        if affected == 0 {
            return Err(StorageError::NotFound {
                entity_type: "Package",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub async fn delete_package(&self, id: i64) -> Result<()> {
        let affected = self
            .backend()
            .execute("DELETE FROM packages WHERE id = ?", vec![id.into()])
            .await?;

        if affected == 0 {
            return Err(StorageError::NotFound {
                entity_type: "Package",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub async fn package_count(&self) -> Result<i64> {
        let row = self
            .backend()
            .fetch_optional("SELECT COUNT(*) AS c FROM packages", vec![])
            .await?
            .ok_or(StorageError::QueryFailed("COUNT returned no row".to_string()))?;
        row.get_i64("c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::SqliteBackend;
    use std::sync::Arc;

    async fn store() -> Store {
        Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()))
    }

    fn beach_escape() -> PackageForm {
        PackageForm {
            title: "Beach Escape".to_string(),
            location: "Goa".to_string(),
            description: Some("3N/4D seaside fun".to_string()),
            price: 12999.0,
            days: 4,
            image_url: Some("https://picsum.photos/seed/goa/800/500".to_string()),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_fills_defaults() {
        let store = store().await;
        let form = PackageForm {
            image_url: None,
            ..beach_escape()
        };

        let id = store.create_package(&form).await.unwrap();

        let package = store.get_package(id).await.unwrap();
        assert_eq!(package.image_url.as_deref(), Some(DEFAULT_PACKAGE_IMAGE));
        assert_eq!(package.status, PACKAGE_AVAILABLE);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = store().await;
        store.create_package(&beach_escape()).await.unwrap();

        assert_eq!(store.search_packages("goa").await.unwrap().len(), 1);
        assert_eq!(store.search_packages("BEACH").await.unwrap().len(), 1);
        assert_eq!(store.search_packages("manali").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_missing_package_is_not_found() {
        let store = store().await;

        assert!(matches!(
            store.get_package(42).await,
            Err(StorageError::NotFound {
                entity_type: "Package",
                ..
            })
        ));
        assert!(matches!(
            store.delete_package(42).await,
            Err(StorageError::NotFound { .. })
        ));
        assert!(matches!(
            store.update_package(42, &beach_escape()).await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_the_package() {
        let store = store().await;
        let id = store.create_package(&beach_escape()).await.unwrap();

        store.delete_package(id).await.unwrap();

        assert_eq!(store.package_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_featured_returns_newest_first() {
        let store = store().await;
        store.create_package(&beach_escape()).await.unwrap();
        let second = store
            .create_package(&PackageForm {
                title: "Mountain Retreat".to_string(),
                location: "Manali".to_string(),
                ..beach_escape()
            })
            .await
            .unwrap();

        let featured = store.featured_packages(3).await.unwrap();

        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].id, second);
    }
}
