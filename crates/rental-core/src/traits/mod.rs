//! Ports the booking engine depends on

mod clock;
mod repositories;

pub use clock::{Clock, SystemClock};
pub use repositories::{
    PropertyRepository, PropertyReservationQuery, RepoResult, ReservationRepository,
};
