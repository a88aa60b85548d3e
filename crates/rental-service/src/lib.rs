//! # rental-service
//!
//! Application layer containing the booking rules, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateReservationRequest, HealthResponse, ReadinessResponse, ReservationResponse,
    UpdateReservationRequest,
};
pub use services::{
    AvailabilityService, PricingService, ReservationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
