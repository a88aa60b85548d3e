//! Business logic services
//!
//! Validation, availability, pricing, and the reservation lifecycle built on
//! top of the repository traits from rental-core.

pub mod availability;
pub mod context;
pub mod error;
pub mod pricing;
pub mod reservation;

pub use availability::AvailabilityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use pricing::PricingService;
pub use reservation::ReservationService;
