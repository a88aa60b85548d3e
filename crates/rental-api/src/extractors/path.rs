//! Path parameter extractors
//!
//! Path rejections are turned into the JSON error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use rental_core::Snowflake;
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Path parameters deserialized into `T`
#[derive(Debug, Clone)]
pub struct SnowflakePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for SnowflakePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(SnowflakePath(inner))
    }
}

/// Path parameters with reservation_id
#[derive(Debug, Deserialize)]
pub struct ReservationIdPath {
    pub reservation_id: String,
}

impl ReservationIdPath {
    /// Parse reservation_id as Snowflake
    pub fn reservation_id(&self) -> Result<Snowflake, ApiError> {
        self.reservation_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid reservation_id format"))
    }
}
