//! Request DTOs for API endpoints
//!
//! Field names are camelCase on the wire. Unknown fields (a `userId` or
//! `totalPrice` sent by the client, for example) are ignored: the owner comes
//! from the bearer token and the price is always computed.

use chrono::{DateTime, Utc};
use rental_core::entities::{PaymentStatus, Reservation, ReservationStatus};
use rental_core::Snowflake;
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Create reservation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub property_id: Snowflake,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    /// Checked by the booking rules, not here, so a zero count reports
    /// `INVALID_GUEST_COUNT`
    pub guest_count: i32,

    #[validate(length(max = 1000, message = "Special requests must be at most 1000 characters"))]
    pub special_requests: Option<String>,
}

/// Partial update of a reservation
///
/// Absent fields are left unchanged. Present fields are applied as given,
/// even when the value is invalid, and then re-validated.
/// `specialRequests: null` clears the text.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    pub guest_count: Option<i32>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 1000, message = "Special requests must be at most 1000 characters"))]
    pub special_requests: Option<Option<String>>,

    pub status: Option<ReservationStatus>,

    pub payment_status: Option<PaymentStatus>,
}

impl UpdateReservationRequest {
    /// Apply the present fields to a reservation
    pub fn apply_to(self, reservation: &mut Reservation) {
        if let Some(start_date) = self.start_date {
            reservation.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            reservation.end_date = end_date;
        }
        if let Some(guest_count) = self.guest_count {
            reservation.guest_count = guest_count;
        }
        if let Some(special_requests) = self.special_requests {
            reservation.special_requests = special_requests;
        }
        if let Some(status) = self.status {
            reservation.status = status;
        }
        if let Some(payment_status) = self.payment_status {
            reservation.payment_status = payment_status;
        }
    }
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
