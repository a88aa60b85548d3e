//! Error handling utilities for repositories

use rental_core::error::DomainError;
use rental_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// SQLSTATE raised when an EXCLUDE constraint rejects a row
const EXCLUSION_VIOLATION: &str = "23P01";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map errors from writing a reservation row.
///
/// The overlap exclusion constraint surfaces as a booking conflict and a
/// dangling `property_id` as an unknown property.
pub fn map_reservation_write_error(e: SqlxError, property_id: Snowflake) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return DomainError::ReservationConflict;
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::PropertyNotFound(property_id);
        }
    }
    map_db_error(e)
}

/// Create a "reservation not found" error
pub fn reservation_not_found(id: Snowflake) -> DomainError {
    DomainError::ReservationNotFound(id)
}
