//! Entity to DTO mappers

use rental_core::entities::Reservation;

use super::responses::ReservationResponse;

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id.to_string(),
            user_id: reservation.user_id.to_string(),
            property_id: reservation.property_id.to_string(),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            guest_count: reservation.guest_count,
            special_requests: reservation.special_requests.clone(),
            total_price: reservation.total_price.amount(),
            status: reservation.status,
            payment_status: reservation.payment_status,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self::from(&reservation)
    }
}
