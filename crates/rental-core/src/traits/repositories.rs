//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Property, Reservation, ReservationStatus};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Property Repository
// ============================================================================

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find property by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

/// Filter for loading the bookings of one property
#[derive(Debug, Clone, Default)]
pub struct PropertyReservationQuery {
    /// Leave this reservation out (an update must not conflict with itself)
    pub exclude_id: Option<Snowflake>,
    /// Leave out reservations in any of these statuses
    pub exclude_statuses: Vec<ReservationStatus>,
}

impl PropertyReservationQuery {
    /// Reservations that can block a new or changed booking
    pub fn blocking(exclude_id: Option<Snowflake>) -> Self {
        Self {
            exclude_id,
            exclude_statuses: vec![ReservationStatus::Cancelled],
        }
    }

    /// Check whether a reservation passes this filter
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.exclude_id != Some(reservation.id)
            && !self.exclude_statuses.contains(&reservation.status)
    }
}

/// Reservation persistence.
///
/// `create` and `update` must be atomic with respect to availability: when
/// the written reservation is not cancelled, an implementation re-checks for
/// an overlapping non-cancelled reservation on the same property inside the
/// same critical section as the write and fails with
/// `DomainError::ReservationConflict` instead of writing.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reservation>>;

    /// List all reservations of a user, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Reservation>>;

    /// List reservations of a property that pass the query filter
    async fn find_by_property(
        &self,
        property_id: Snowflake,
        query: &PropertyReservationQuery,
    ) -> RepoResult<Vec<Reservation>>;

    /// Persist a new reservation, returning its ID
    async fn create(&self, reservation: &Reservation) -> RepoResult<Snowflake>;

    /// Replace a stored reservation
    async fn update(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Remove a reservation
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
