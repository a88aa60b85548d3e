//! Domain errors - error types for the booking engine

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("start date must be before end date")]
    InvalidDateRange,

    #[error("start date must be in the future")]
    StartDateInPast,

    #[error("guest count must be greater than 0")]
    InvalidGuestCount,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("the property is not available for the selected dates")]
    ReservationConflict,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reservation not found: {0}")]
    ReservationNotFound(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You don't have permission to modify this reservation")]
    NotReservationOwner,

    // =========================================================================
    // Lookup Errors (a referenced resource is missing)
    // =========================================================================
    #[error("Property not found: {0}")]
    PropertyNotFound(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::StartDateInPast => "START_DATE_IN_PAST",
            Self::InvalidGuestCount => "INVALID_GUEST_COUNT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ReservationConflict => "RESERVATION_CONFLICT",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::NotReservationOwner => "NOT_RESERVATION_OWNER",
            Self::PropertyNotFound(_) => "UNKNOWN_PROPERTY",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReservationNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateRange
                | Self::StartDateInPast
                | Self::InvalidGuestCount
                | Self::ValidationError(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotReservationOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReservationConflict)
    }

    /// Check if a referenced resource could not be resolved.
    ///
    /// Reported to clients as a bad request: the caller supplied the ID.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::PropertyNotFound(_))
    }

    /// HTTP status class for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() || self.is_lookup() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
