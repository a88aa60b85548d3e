//! Reservation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: i64,
    pub user_id: i64,
    pub property_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guest_count: i32,
    pub special_requests: Option<String>,
    pub total_price: f64,
    /// `pending | confirmed | cancelled`
    pub status: String,
    /// `pending | paid | refunded`
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
