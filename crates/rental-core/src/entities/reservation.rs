//! Reservation entity - a guest's booking of a property for a stay

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Money, Snowflake, StayPeriod};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Get the stored string form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    /// Get the stored string form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Error when parsing a stored status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct StatusParseError(pub String);

/// Reservation entity
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub property_id: Snowflake,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub guest_count: i32,
    pub special_requests: Option<String>,
    pub total_price: Money,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new pending reservation
    ///
    /// Status and payment status always start as `pending`; the total price
    /// is left at zero until priced.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        property_id: Snowflake,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        guest_count: i32,
        special_requests: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            property_id,
            start_date,
            end_date,
            guest_count,
            special_requests,
            total_price: Money::ZERO,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// The booked stay as a period
    #[inline]
    pub fn period(&self) -> StayPeriod {
        StayPeriod::new(self.start_date, self.end_date)
    }

    /// Check if the given user owns this reservation
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Cancelled reservations never block availability
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    /// Check the reservation's own invariants against the current time.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. start strictly before end
    /// 2. start strictly after `now`
    /// 3. at least one guest
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.start_date >= self.end_date {
            return Err(DomainError::InvalidDateRange);
        }
        if self.start_date <= now {
            return Err(DomainError::StartDateInPast);
        }
        if self.guest_count <= 0 {
            return Err(DomainError::InvalidGuestCount);
        }
        Ok(())
    }
}
