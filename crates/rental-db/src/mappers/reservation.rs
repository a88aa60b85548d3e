//! Reservation entity <-> model mapper

use chrono::{DateTime, Utc};
use rental_core::entities::{PaymentStatus, Reservation, ReservationStatus};
use rental_core::error::DomainError;
use rental_core::value_objects::{Money, Snowflake};

use crate::models::ReservationModel;

/// Convert a row to a Reservation.
///
/// Status columns are free text in the table, so an unknown value is
/// reported as a database error rather than guessed.
impl TryFrom<ReservationModel> for Reservation {
    type Error = DomainError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        let status: ReservationStatus = model.status.parse().map_err(|e| {
            DomainError::DatabaseError(format!("reservation {}: {e}", model.id))
        })?;
        let payment_status: PaymentStatus = model.payment_status.parse().map_err(|e| {
            DomainError::DatabaseError(format!("reservation {}: {e}", model.id))
        })?;

        Ok(Reservation {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            property_id: Snowflake::new(model.property_id),
            start_date: model.start_date,
            end_date: model.end_date,
            guest_count: model.guest_count,
            special_requests: model.special_requests,
            total_price: Money::new(model.total_price),
            status,
            payment_status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Reservation values laid out for INSERT/UPDATE binding
pub struct ReservationWrite<'a> {
    pub id: i64,
    pub user_id: i64,
    pub property_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guest_count: i32,
    pub special_requests: Option<&'a str>,
    pub total_price: f64,
    pub status: &'static str,
    pub payment_status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> ReservationWrite<'a> {
    pub fn new(reservation: &'a Reservation) -> Self {
        Self {
            id: reservation.id.into_inner(),
            user_id: reservation.user_id.into_inner(),
            property_id: reservation.property_id.into_inner(),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            guest_count: reservation.guest_count,
            special_requests: reservation.special_requests.as_deref(),
            total_price: reservation.total_price.amount(),
            status: reservation.status.as_str(),
            payment_status: reservation.payment_status.as_str(),
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}
