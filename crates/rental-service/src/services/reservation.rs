//! Reservation service
//!
//! Creation, lookup, partial update, and deletion of reservations.
//! Failures are returned to the caller untouched; only completed state
//! changes are logged here.

use rental_core::entities::Reservation;
use rental_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateReservationRequest, ReservationResponse, UpdateReservationRequest};

use super::availability::AvailabilityService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::pricing::PricingService;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a stay for `owner_id`
    ///
    /// The new reservation starts `pending`/`pending` whatever the client sent.
    #[instrument(skip(self, request), fields(property_id = %request.property_id))]
    pub async fn create_reservation(
        &self,
        owner_id: Snowflake,
        request: CreateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        let now = self.ctx.clock().now();

        let mut reservation = Reservation::new(
            self.ctx.generate_id(),
            owner_id,
            request.property_id,
            request.start_date,
            request.end_date,
            request.guest_count,
            request.special_requests,
            now,
        );

        reservation.validate(now)?;

        AvailabilityService::new(self.ctx)
            .check_availability(&reservation, None)
            .await?;

        reservation.total_price = PricingService::new(self.ctx)
            .calculate_price(reservation.property_id, &reservation.period())
            .await?;

        // The repository re-checks overlap atomically with the insert
        let reservation_id = self.ctx.reservation_repo().create(&reservation).await?;

        info!(
            reservation_id = %reservation_id,
            property_id = %reservation.property_id,
            user_id = %owner_id,
            total_price = %reservation.total_price,
            "Reservation created"
        );

        Ok(ReservationResponse::from(reservation))
    }

    /// Get a reservation by ID
    #[instrument(skip(self))]
    pub async fn get_reservation(&self, reservation_id: Snowflake) -> ServiceResult<ReservationResponse> {
        let reservation = self.load(reservation_id).await?;
        Ok(ReservationResponse::from(reservation))
    }

    /// All reservations of a user, newest first
    #[instrument(skip(self))]
    pub async fn list_user_reservations(
        &self,
        owner_id: Snowflake,
    ) -> ServiceResult<Vec<ReservationResponse>> {
        let reservations = self.ctx.reservation_repo().find_by_user(owner_id).await?;

        Ok(reservations.iter().map(ReservationResponse::from).collect())
    }

    /// Apply a partial update to a reservation the caller owns.
    ///
    /// The patched reservation is validated, checked for availability
    /// against every other booking, and re-priced at the current rate.
    #[instrument(skip(self, request))]
    pub async fn update_reservation(
        &self,
        reservation_id: Snowflake,
        owner_id: Snowflake,
        request: UpdateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        let mut reservation = self.load_owned(reservation_id, owner_id).await?;
        let now = self.ctx.clock().now();

        request.apply_to(&mut reservation);
        reservation.validate(now)?;

        AvailabilityService::new(self.ctx)
            .check_availability(&reservation, Some(reservation.id))
            .await?;

        reservation.total_price = PricingService::new(self.ctx)
            .calculate_price(reservation.property_id, &reservation.period())
            .await?;
        reservation.updated_at = now;

        self.ctx.reservation_repo().update(&reservation).await?;

        info!(
            reservation_id = %reservation.id,
            status = %reservation.status,
            payment_status = %reservation.payment_status,
            total_price = %reservation.total_price,
            "Reservation updated"
        );

        Ok(ReservationResponse::from(reservation))
    }

    /// Delete a reservation the caller owns
    #[instrument(skip(self))]
    pub async fn delete_reservation(
        &self,
        reservation_id: Snowflake,
        owner_id: Snowflake,
    ) -> ServiceResult<()> {
        self.load_owned(reservation_id, owner_id).await?;

        self.ctx.reservation_repo().delete(reservation_id).await?;

        info!(reservation_id = %reservation_id, user_id = %owner_id, "Reservation deleted");

        Ok(())
    }

    async fn load(&self, reservation_id: Snowflake) -> ServiceResult<Reservation> {
        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        Ok(reservation)
    }

    async fn load_owned(
        &self,
        reservation_id: Snowflake,
        owner_id: Snowflake,
    ) -> ServiceResult<Reservation> {
        let reservation = self.load(reservation_id).await?;

        if !reservation.is_owned_by(owner_id) {
            return Err(DomainError::NotReservationOwner.into());
        }

        Ok(reservation)
    }
}
