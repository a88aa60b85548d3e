//! Entity to model mappers
//!
//! Conversions between domain entities (rental-core) and database models.
//! - `From<Model>`/`TryFrom<Model>` for entities: database rows to domain objects
//! - `*Write` structs: entity data laid out for binding

mod property;
mod reservation;

pub use reservation::ReservationWrite;
