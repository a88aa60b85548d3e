//! # rental-core
//!
//! Domain layer containing the reservation entity, value objects, and the
//! repository/clock traits the booking engine depends on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{PaymentStatus, Property, Reservation, ReservationStatus};
pub use error::DomainError;
pub use traits::{
    Clock, PropertyRepository, PropertyReservationQuery, RepoResult, ReservationRepository,
    SystemClock,
};
pub use value_objects::{Money, Snowflake, SnowflakeGenerator, SnowflakeParseError, StayPeriod};
