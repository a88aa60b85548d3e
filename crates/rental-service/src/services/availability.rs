//! Availability service
//!
//! Decides whether a property is free for a reservation's dates.

use rental_core::entities::Reservation;
use rental_core::traits::PropertyReservationQuery;
use rental_core::{DomainError, Snowflake};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fail with `ReservationConflict` if any other non-cancelled booking of
    /// the same property overlaps this one's stay (both ends inclusive).
    ///
    /// `exclude_id` names the reservation being changed, so it never
    /// conflicts with its own stored version.
    #[instrument(skip(self, reservation), fields(property_id = %reservation.property_id))]
    pub async fn check_availability(
        &self,
        reservation: &Reservation,
        exclude_id: Option<Snowflake>,
    ) -> ServiceResult<()> {
        let existing = self
            .ctx
            .reservation_repo()
            .find_by_property(
                reservation.property_id,
                &PropertyReservationQuery::blocking(exclude_id),
            )
            .await?;

        let wanted = reservation.period();
        if existing.iter().any(|other| other.period().overlaps(&wanted)) {
            return Err(DomainError::ReservationConflict.into());
        }

        Ok(())
    }
}
