//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in rental-core.

mod error;
mod property;
mod reservation;

pub use property::PgPropertyRepository;
pub use reservation::PgReservationRepository;
