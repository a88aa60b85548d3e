//! Domain entities - core business objects

mod property;
mod reservation;

pub use property::Property;
pub use reservation::{PaymentStatus, Reservation, ReservationStatus, StatusParseError};
