//! Append-only activity logs.
//!
//! Recording an action must never fail the request it annotates, so these
//! swallow storage errors with a warning instead of propagating them.
//! Anonymous actions omit the actor column entirely, which keeps null
//! handling out of the integer-typed id parameters.

use wayfare_core::domain::ActivityRecord;
use wayfare_core::storage::Result;

use super::conversions::row_to_activity;
use super::Store;

impl Store {
    /// Records an admin-surface action into `admin_activity`.
    pub async fn record_admin_action(&self, admin_id: Option<i64>, role: &str, action: &str) {
        if let Err(e) = self.insert_admin_activity(admin_id, role, action).await {
            tracing::warn!(error = %e, action, "failed to record admin activity");
        }
    }

    /// Records a portal action into `cloud_activity`.
    pub async fn record_user_action(&self, user_id: Option<i64>, role: &str, action: &str) {
        if let Err(e) = self.insert_cloud_activity(user_id, role, action).await {
            tracing::warn!(error = %e, action, "failed to record user activity");
        }
    }

    /// Most recent admin-surface actions, newest first.
    pub async fn recent_admin_activity(&self, limit: i64) -> Result<Vec<ActivityRecord>> {
        let rows = self
            .backend()
            .fetch_all(
                "SELECT * FROM admin_activity ORDER BY created_at DESC, id DESC LIMIT ?",
                vec![limit.into()],
            )
            .await?;
        rows.iter().map(|row| row_to_activity(row, "admin_id")).collect()
    }

    /// Most recent portal actions, newest first.
    pub async fn recent_cloud_activity(&self, limit: i64) -> Result<Vec<ActivityRecord>> {
        let rows = self
            .backend()
            .fetch_all(
                "SELECT * FROM cloud_activity ORDER BY created_at DESC, id DESC LIMIT ?",
                vec![limit.into()],
            )
            .await?;
        rows.iter().map(|row| row_to_activity(row, "user_id")).collect()
    }

    async fn insert_admin_activity(
        &self,
        admin_id: Option<i64>,
        role: &str,
        action: &str,
    ) -> Result<i64> {
        match admin_id {
            Some(id) => {
                self.backend()
                    .insert(
                        "INSERT INTO admin_activity (admin_id, role, action, created_at) \
                         VALUES (?, ?, ?, ?)",
                        vec![
                            id.into(),
                            role.into(),
                            action.into(),
                            Self::now_string().into(),
                        ],
                    )
                    .await
            }
            None => {
                self.backend()
                    .insert(
                        "INSERT INTO admin_activity (role, action, created_at) VALUES (?, ?, ?)",
                        vec![role.into(), action.into(), Self::now_string().into()],
                    )
                    .await
            }
        }
    }

    async fn insert_cloud_activity(
        &self,
        user_id: Option<i64>,
        role: &str,
        action: &str,
    ) -> Result<i64> {
        match user_id {
            Some(id) => {
                self.backend()
                    .insert(
                        "INSERT INTO cloud_activity (user_id, role, action, created_at) \
                         VALUES (?, ?, ?, ?)",
                        vec![
                            id.into(),
                            role.into(),
                            action.into(),
                            Self::now_string().into(),
                        ],
                    )
                    .await
            }
            None => {
                self.backend()
                    .insert(
                        "INSERT INTO cloud_activity (role, action, created_at) VALUES (?, ?, ?)",
                        vec![role.into(), action.into(), Self::now_string().into()],
                    )
                    .await
            }
        }
    }
}
