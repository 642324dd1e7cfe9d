//! Reservation repository

use lightbnb_core::DEFAULT_LIMIT;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;
use crate::records::ReservationRecord;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reservations for a guest, earliest start date first.
    ///
    /// Uses LEFT JOIN so properties without reviews still appear, with a
    /// `None` rating. `limit` falls back to 10 when absent or non-positive.
    #[instrument(skip(self))]
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationRecord>, DbError> {
        let limit = match limit {
            Some(n) if n > 0 => n,
            _ => DEFAULT_LIMIT,
        };

        let rows = sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT
                r.id,
                r.property_id,
                p.title,
                r.start_date,
                r.end_date,
                p.cost_per_night,
                avg(pr.rating)::float8 AS average_rating
            FROM reservations r
            JOIN properties p ON p.id = r.property_id
            LEFT JOIN property_reviews pr ON pr.property_id = p.id
            WHERE r.guest_id = $1
            GROUP BY r.id, p.id
            ORDER BY r.start_date ASC, r.id ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
