//! Contact-form feedback queries.

use wayfare_core::domain::Feedback;
use wayfare_core::storage::Result;

use super::conversions::row_to_feedback;
use super::Store;

impl Store {
    pub async fn create_feedback(
        &self,
        user_name: Option<&str>,
        user_email: Option<&str>,
        subject: Option<&str>,
        message: &str,
    ) -> Result<i64> {
        self.backend()
            .insert(
                "INSERT INTO feedback (user_name, user_email, subject, message, created_at) \
                 VALUES (?, ?, ?, ?, ?)",
                vec![
                    user_name.into(),
                    user_email.into(),
                    subject.into(),
                    message.into(),
                    Self::now_string().into(),
                ],
            )
            .await
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        let rows = self
            .backend()
            .fetch_all(
                "SELECT * FROM feedback ORDER BY created_at DESC, id DESC",
                vec![],
            )
            .await?;
        rows.iter().map(row_to_feedback).collect()
    }

    pub async fn feedback_count(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) AS c FROM feedback", vec![]).await
    }
}
