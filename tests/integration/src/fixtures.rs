//! Test fixtures and data generators
//!
//! Properties are inserted straight into PostgreSQL (listings are owned by
//! another service) and access tokens are signed with the shared secret.

use std::sync::LazyLock;

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rental_common::JwtService;
use rental_core::{Snowflake, SnowflakeGenerator};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Worker ID reserved for fixture data so it never collides with server IDs
static IDS: LazyLock<SnowflakeGenerator> = LazyLock::new(|| SnowflakeGenerator::new(1022));

/// A fresh user ID
pub fn unique_user() -> Snowflake {
    IDS.generate()
}

/// Signed one-hour access token for `user_id`
pub fn access_token(secret: &str, user_id: Snowflake) -> Result<String> {
    Ok(JwtService::new(secret).issue_access_token(user_id, 3600)?)
}

/// Connect to the test database
pub async fn test_pool() -> Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    Ok(PgPool::connect(&url).await?)
}

/// Insert a property with the given nightly rate
pub async fn insert_property(pool: &PgPool, rate: f64) -> Result<Snowflake> {
    let id = IDS.generate();
    sqlx::query("INSERT INTO properties (id, owner_id, title, rate) VALUES ($1, $2, $3, $4)")
        .bind(id.into_inner())
        .bind(IDS.generate().into_inner())
        .bind(format!("Integration listing {id}"))
        .bind(rate)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Midnight UTC `days` after 2031-09-01
pub fn day(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2031, 9, 1, 0, 0, 0).single().unwrap_or_default() + Duration::days(days)
}

/// Create reservation request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationBody {
    pub property_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guest_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl CreateReservationBody {
    /// `nights` nights at `property_id` starting `from` days after the base date
    pub fn stay(property_id: Snowflake, from: i64, nights: i64) -> Self {
        Self {
            property_id: property_id.to_string(),
            start_date: day(from),
            end_date: day(from + nights),
            guest_count: 2,
            special_requests: None,
        }
    }
}

/// Reservation as returned by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationBody {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guest_count: i32,
    pub special_requests: Option<String>,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
}
