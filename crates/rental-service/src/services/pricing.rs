//! Pricing service

use rental_core::{DomainError, Money, Snowflake, StayPeriod};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Pricing service
pub struct PricingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PricingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Price a stay at the property's current nightly rate.
    ///
    /// Nights are fractional (elapsed hours / 24) and the total is not rounded.
    #[instrument(skip(self))]
    pub async fn calculate_price(
        &self,
        property_id: Snowflake,
        period: &StayPeriod,
    ) -> ServiceResult<Money> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or(DomainError::PropertyNotFound(property_id))?;

        Ok(property.rate.for_nights(period.nights()))
    }
}
