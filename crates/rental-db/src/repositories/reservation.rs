//! PostgreSQL implementation of ReservationRepository
//!
//! Writes serialize per property with a transaction-scoped advisory lock and
//! re-run the overlap query under that lock, so two concurrent bookings for
//! the same dates cannot both commit.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use rental_core::entities::Reservation;
use rental_core::error::DomainError;
use rental_core::traits::{PropertyReservationQuery, RepoResult, ReservationRepository};
use rental_core::value_objects::Snowflake;

use crate::mappers::ReservationWrite;
use crate::models::ReservationModel;

use super::error::{map_db_error, map_reservation_write_error, reservation_not_found};

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn into_entities(rows: Vec<ReservationModel>) -> RepoResult<Vec<Reservation>> {
        rows.into_iter().map(Reservation::try_from).collect()
    }
}

/// Block until no other transaction holds the booking lock for this property
async fn lock_property(conn: &mut PgConnection, property_id: Snowflake) -> RepoResult<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(property_id.into_inner())
        .execute(conn)
        .await
        .map_err(map_db_error)?;

    Ok(())
}

/// Fail with `ReservationConflict` if a live, non-cancelled reservation other
/// than this one overlaps its stay. Both ends are inclusive.
async fn ensure_available(conn: &mut PgConnection, reservation: &Reservation) -> RepoResult<()> {
    if reservation.is_cancelled() {
        return Ok(());
    }

    let conflicting = sqlx::query_scalar::<_, bool>(
        r"
        SELECT EXISTS (
            SELECT 1
            FROM reservations
            WHERE property_id = $1
              AND id <> $2
              AND deleted_at IS NULL
              AND status <> 'cancelled'
              AND start_date <= $4
              AND end_date >= $3
        )
        ",
    )
    .bind(reservation.property_id.into_inner())
    .bind(reservation.id.into_inner())
    .bind(reservation.start_date)
    .bind(reservation.end_date)
    .fetch_one(conn)
    .await
    .map_err(map_db_error)?;

    if conflicting {
        debug!(property_id = %reservation.property_id, "overlap found under booking lock");
        return Err(DomainError::ReservationConflict);
    }

    Ok(())
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, user_id, property_id, start_date, end_date, guest_count, special_requests,
                   total_price, status, payment_status, created_at, updated_at
            FROM reservations
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, user_id, property_id, start_date, end_date, guest_count, special_requests,
                   total_price, status, payment_status, created_at, updated_at
            FROM reservations
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::into_entities(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_property(
        &self,
        property_id: Snowflake,
        query: &PropertyReservationQuery,
    ) -> RepoResult<Vec<Reservation>> {
        let excluded_statuses: Vec<String> = query
            .exclude_statuses
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, user_id, property_id, start_date, end_date, guest_count, special_requests,
                   total_price, status, payment_status, created_at, updated_at
            FROM reservations
            WHERE property_id = $1
              AND deleted_at IS NULL
              AND ($2::BIGINT IS NULL OR id <> $2)
              AND NOT (status = ANY($3))
            ORDER BY start_date ASC
            ",
        )
        .bind(property_id.into_inner())
        .bind(query.exclude_id.map(Snowflake::into_inner))
        .bind(&excluded_statuses)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::into_entities(rows)
    }

    #[instrument(skip(self, reservation), fields(id = %reservation.id, property_id = %reservation.property_id))]
    async fn create(&self, reservation: &Reservation) -> RepoResult<Snowflake> {
        let row = ReservationWrite::new(reservation);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_property(&mut tx, reservation.property_id).await?;
        ensure_available(&mut tx, reservation).await?;

        sqlx::query(
            r"
            INSERT INTO reservations (
                id, user_id, property_id, start_date, end_date, guest_count, special_requests,
                total_price, status, payment_status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(row.property_id)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.guest_count)
        .bind(row.special_requests)
        .bind(row.total_price)
        .bind(row.status)
        .bind(row.payment_status)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_reservation_write_error(e, reservation.property_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(reservation.id)
    }

    #[instrument(skip(self, reservation), fields(id = %reservation.id, property_id = %reservation.property_id))]
    async fn update(&self, reservation: &Reservation) -> RepoResult<()> {
        let row = ReservationWrite::new(reservation);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_property(&mut tx, reservation.property_id).await?;
        ensure_available(&mut tx, reservation).await?;

        let result = sqlx::query(
            r"
            UPDATE reservations
            SET start_date = $2,
                end_date = $3,
                guest_count = $4,
                special_requests = $5,
                total_price = $6,
                status = $7,
                payment_status = $8,
                updated_at = $9
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(row.id)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.guest_count)
        .bind(row.special_requests)
        .bind(row.total_price)
        .bind(row.status)
        .bind(row.payment_status)
        .bind(row.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_reservation_write_error(e, reservation.property_id))?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(reservation.id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reservations
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }
}
