//! Property entity - the rentable unit a reservation books

use chrono::{DateTime, Utc};

use crate::value_objects::{Money, Snowflake};

/// Property entity
///
/// Only `rate` participates in booking; the remaining fields are carried so
/// the listing can be shown next to a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub title: String,
    /// Price per night
    pub rate: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new Property
    pub fn new(id: Snowflake, owner_id: Snowflake, title: String, rate: Money) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            rate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the given user listed this property
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }
}
