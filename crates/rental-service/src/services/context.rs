//! Service context - dependency container for services

use std::sync::Arc;

use rental_core::traits::{Clock, PropertyRepository, ReservationRepository};
use rental_core::{Snowflake, SnowflakeGenerator, SystemClock};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Passed by reference to every service. Provides:
/// - Repositories for properties and reservations
/// - The clock deciding what "in the future" means
/// - Snowflake generator for reservation IDs
#[derive(Clone)]
pub struct ServiceContext {
    property_repo: Arc<dyn PropertyRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        property_repo: Arc<dyn PropertyRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            property_repo,
            reservation_repo,
            clock,
            snowflake_generator,
        }
    }

    // === Repositories ===

    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    // === Time and IDs ===

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("snowflake_generator", &self.snowflake_generator)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
///
/// The clock defaults to the system clock; everything else is required.
#[derive(Default)]
pub struct ServiceContextBuilder {
    property_repo: Option<Arc<dyn PropertyRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    clock: Option<Arc<dyn Clock>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.property_repo
                .ok_or_else(|| ServiceError::validation("property_repo is required"))?,
            self.reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
