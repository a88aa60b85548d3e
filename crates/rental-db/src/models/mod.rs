//! Database models - SQLx-compatible structs for PostgreSQL tables

mod property;
mod reservation;

pub use property::PropertyModel;
pub use reservation::ReservationModel;
