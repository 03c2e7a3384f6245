//! Booking and payment queries.

use wayfare_core::domain::{
    Booking, Package, Payment, BOOKING_CONFIRMED, PAYMENT_METHOD_ONLINE, PAYMENT_SUCCESS,
};
use wayfare_core::storage::{Result, StorageError};

use crate::models::{AdminBookingView, BookingStats, UserBookingView};

use super::conversions::{
    row_to_admin_booking, row_to_booking, row_to_payment, row_to_user_booking,
};
use super::Store;

const USER_BOOKINGS: &str = "SELECT b.id, b.package_id, b.travel_date, b.persons, b.status, b.booked_at, \
            p.title AS package_title, p.description AS package_description, \
            p.price AS package_price, p.image_url AS package_image \
     FROM bookings b JOIN packages p ON p.id = b.package_id \
     WHERE b.user_id = ? \
     ORDER BY b.booked_at DESC, b.id DESC";

impl Store {
    /// Records a booking and immediately its payment row.
    ///
    /// There is no settlement flow: the booking is written already
    /// confirmed, and the payment with the fixed SUCCESS status; the amount
    /// is the package price times the party size.
    pub async fn create_booking_with_payment(
        &self,
        user_id: i64,
        package: &Package,
        name: &str,
        email: &str,
        travel_date: &str,
        persons: i64,
    ) -> Result<(i64, f64)> {
        let amount = package.amount_for(persons);

        let booking_id = self
            .backend()
            .insert(
                "INSERT INTO bookings (user_id, package_id, name, email, travel_date, persons, status, booked_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                vec![
                    user_id.into(),
                    package.id.into(),
                    name.into(),
                    email.into(),
                    travel_date.into(),
                    persons.into(),
                    BOOKING_CONFIRMED.into(),
                    Self::now_string().into(),
                ],
            )
            .await?;

        self.backend()
            .insert(
                "INSERT INTO payments (booking_id, user_id, amount, payment_status, payment_method, paid_at) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                vec![
                    booking_id.into(),
                    user_id.into(),
                    amount.into(),
                    PAYMENT_SUCCESS.into(),
                    PAYMENT_METHOD_ONLINE.into(),
                    Self::now_string().into(),
                ],
            )
            .await?;

        Ok((booking_id, amount))
    }

    /// A single booking, scoped to its owner. Someone else's booking id is
    /// indistinguishable from a missing one.
    pub async fn get_user_booking(&self, user_id: i64, booking_id: i64) -> Result<Booking> {
        let row = self
            .backend()
            .fetch_optional(
                "SELECT * FROM bookings WHERE id = ? AND user_id = ?",
                vec![booking_id.into(), user_id.into()],
            )
            .await?
            .ok_or(StorageError::NotFound {
                entity_type: "Booking",
                id: booking_id.to_string(),
            })?;
        row_to_booking(&row)
    }

    /// The payment written alongside a booking.
    pub async fn booking_payment(&self, booking_id: i64) -> Result<Payment> {
        let row = self
            .backend()
            .fetch_optional(
                "SELECT * FROM payments WHERE booking_id = ?",
                vec![booking_id.into()],
            )
            .await?
            .ok_or(StorageError::NotFound {
                entity_type: "Payment",
                id: booking_id.to_string(),
            })?;
        row_to_payment(&row)
    }

    /// A user's bookings joined with package details, newest first.
    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<UserBookingView>> {
        let rows = self
            .backend()
            .fetch_all(USER_BOOKINGS, vec![user_id.into()])
            .await?;
        rows.iter().map(row_to_user_booking).collect()
    }

    pub async fn recent_user_bookings(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<UserBookingView>> {
        let sql = format!("{USER_BOOKINGS} LIMIT ?");
        let rows = self
            .backend()
            .fetch_all(&sql, vec![user_id.into(), limit.into()])
            .await?;
        rows.iter().map(row_to_user_booking).collect()
    }

    /// Total/upcoming/completed counts, splitting on today's date.
    pub async fn user_booking_stats(&self, user_id: i64) -> Result<BookingStats> {
        let today = Self::today_string();

        let total = self
            .count(
                "SELECT COUNT(*) AS c FROM bookings WHERE user_id = ?",
                vec![user_id.into()],
            )
            .await?;
        let upcoming = self
            .count(
                "SELECT COUNT(*) AS c FROM bookings WHERE user_id = ? AND travel_date >= ?",
                vec![user_id.into(), today.clone().into()],
            )
            .await?;
        let completed = self
            .count(
                "SELECT COUNT(*) AS c FROM bookings WHERE user_id = ? AND travel_date < ?",
                vec![user_id.into(), today.into()],
            )
            .await?;

        Ok(BookingStats {
            total,
            upcoming,
            completed,
        })
    }

    /// Every booking joined with its user and package, newest first.
    pub async fn all_bookings(&self) -> Result<Vec<AdminBookingView>> {
        let rows = self
            .backend()
            .fetch_all(
                "SELECT b.id, u.fullname AS user_name, u.email AS user_email, \
                        p.title AS package_title, b.travel_date, b.persons, b.status, b.booked_at \
                 FROM bookings b \
                 JOIN users u ON u.id = b.user_id \
                 JOIN packages p ON p.id = b.package_id \
                 ORDER BY b.booked_at DESC, b.id DESC",
                vec![],
            )
            .await?;
        rows.iter().map(row_to_admin_booking).collect()
    }

    pub async fn booking_count(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) AS c FROM bookings", vec![]).await
    }

    /// Sum of successfully paid amounts.
    pub async fn total_revenue(&self) -> Result<f64> {
        let row = self
            .backend()
            .fetch_optional(
                "SELECT COALESCE(SUM(amount), 0) AS revenue FROM payments \
                 WHERE TRIM(LOWER(payment_status)) = 'success'",
                vec![],
            )
            .await?
            .ok_or(StorageError::QueryFailed("SUM returned no row".to_string()))?;
        row.get_f64("revenue")
    }

    pub(crate) async fn count(
        &self,
        sql: &str,
        params: Vec<wayfare_core::storage::SqlValue>,
    ) -> Result<i64> {
        let row = self
            .backend()
            .fetch_optional(sql, params)
            .await?
            .ok_or(StorageError::QueryFailed("COUNT returned no row".to_string()))?;
        row.get_i64("c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::SqliteBackend;
    use crate::models::PackageForm;
    use std::sync::Arc;

    async fn store_with_user_and_package() -> (Store, i64, Package) {
        let store = Store::new(Arc::new(SqliteBackend::new_in_memory().await.unwrap()));
        let user_id = store
            .create_user("Jane", "jane@example.com", "hash", None, None)
            .await
            .unwrap();
        let package_id = store
            .create_package(&PackageForm {
                title: "Beach Escape".to_string(),
                location: "Goa".to_string(),
                description: Some("3N/4D seaside fun".to_string()),
                price: 12999.0,
                days: 4,
                image_url: None,
                status: None,
            })
            .await
            .unwrap();
        let package = store.get_package(package_id).await.unwrap();
        (store, user_id, package)
    }

    #[tokio::test]
    async fn test_booking_writes_a_success_payment() {
        let (store, user_id, package) = store_with_user_and_package().await;

        let (booking_id, amount) = store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2099-06-01",
                3,
            )
            .await
            .unwrap();

        assert_eq!(amount, 12999.0 * 3.0);
        assert!(booking_id > 0);
        assert_eq!(store.total_revenue().await.unwrap(), amount);
        assert_eq!(store.booking_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_receipt_pair_is_scoped_to_the_owner() {
        let (store, user_id, package) = store_with_user_and_package().await;
        let (booking_id, amount) = store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2099-06-01",
                2,
            )
            .await
            .unwrap();

        let booking = store.get_user_booking(user_id, booking_id).await.unwrap();
        let payment = store.booking_payment(booking_id).await.unwrap();

        assert_eq!(booking.status, BOOKING_CONFIRMED);
        assert_eq!(payment.amount, amount);
        assert_eq!(payment.payment_status, PAYMENT_SUCCESS);
        assert_eq!(payment.payment_method, PAYMENT_METHOD_ONLINE);

        let other_user = store
            .create_user("Joe", "joe@example.com", "hash", None, None)
            .await
            .unwrap();
        assert!(matches!(
            store.get_user_booking(other_user, booking_id).await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_stats_split_on_travel_date() {
        let (store, user_id, package) = store_with_user_and_package().await;

        store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2099-06-01",
                1,
            )
            .await
            .unwrap();
        store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2001-06-01",
                1,
            )
            .await
            .unwrap();

        let stats = store.user_booking_stats(user_id).await.unwrap();

        assert_eq!(
            stats,
            BookingStats {
                total: 2,
                upcoming: 1,
                completed: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_user_bookings_carry_package_details() {
        let (store, user_id, package) = store_with_user_and_package().await;
        store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2099-06-01",
                2,
            )
            .await
            .unwrap();

        let bookings = store.user_bookings(user_id).await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].package_title, "Beach Escape");
        assert_eq!(bookings[0].package_price, 12999.0);
        assert_eq!(bookings[0].persons, 2);
    }

    #[tokio::test]
    async fn test_booking_for_unknown_user_violates_foreign_key() {
        let (store, _, package) = store_with_user_and_package().await;

        let err = store
            .create_booking_with_payment(
                999,
                &package,
                "Ghost",
                "ghost@example.com",
                "2099-06-01",
                1,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_admin_listing_joins_user_and_package() {
        let (store, user_id, package) = store_with_user_and_package().await;
        store
            .create_booking_with_payment(
                user_id,
                &package,
                "Jane",
                "jane@example.com",
                "2099-06-01",
                1,
            )
            .await
            .unwrap();

        let bookings = store.all_bookings().await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].user_name, "Jane");
        assert_eq!(bookings[0].package_title, "Beach Escape");
    }
}
