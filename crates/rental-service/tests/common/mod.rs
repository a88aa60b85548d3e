//! In-memory repositories and a settable clock for service tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::{Mutex, RwLock};

use rental_core::entities::{Property, Reservation};
use rental_core::traits::{
    Clock, PropertyRepository, PropertyReservationQuery, RepoResult, ReservationRepository,
};
use rental_core::{DomainError, Money, Snowflake, SnowflakeGenerator};
use rental_service::{CreateReservationRequest, ServiceContext, ServiceContextBuilder};

// ============================================================================
// Clock
// ============================================================================

/// Clock frozen at a chosen instant
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock()
    }
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<HashMap<Snowflake, Property>>,
}

impl InMemoryPropertyRepository {
    pub fn insert(&self, property: Property) {
        self.properties.write().insert(property.id, property);
    }

    pub fn set_rate(&self, id: Snowflake, rate: Money) {
        if let Some(property) = self.properties.write().get_mut(&id) {
            property.rate = rate;
        }
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        Ok(self.properties.read().get(&id).cloned())
    }
}

// ============================================================================
// Reservations
// ============================================================================

/// Conflict check and write happen under one lock, like the Postgres
/// repository's advisory lock.
#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: Mutex<HashMap<Snowflake, Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn stored(&self, id: Snowflake) -> Option<Reservation> {
        self.reservations.lock().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.reservations.lock().len()
    }

    fn ensure_available(
        stored: &HashMap<Snowflake, Reservation>,
        reservation: &Reservation,
    ) -> RepoResult<()> {
        if reservation.is_cancelled() {
            return Ok(());
        }

        let query = PropertyReservationQuery::blocking(Some(reservation.id));
        let wanted = reservation.period();
        let conflict = stored.values().any(|other| {
            other.property_id == reservation.property_id
                && query.matches(other)
                && other.period().overlaps(&wanted)
        });

        if conflict {
            Err(DomainError::ReservationConflict)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reservation>> {
        Ok(self.stored(id))
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations
            .lock()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    async fn find_by_property(
        &self,
        property_id: Snowflake,
        query: &PropertyReservationQuery,
    ) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .values()
            .filter(|r| r.property_id == property_id && query.matches(r))
            .cloned()
            .collect())
    }

    async fn create(&self, reservation: &Reservation) -> RepoResult<Snowflake> {
        let mut stored = self.reservations.lock();
        Self::ensure_available(&stored, reservation)?;
        stored.insert(reservation.id, reservation.clone());
        Ok(reservation.id)
    }

    async fn update(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut stored = self.reservations.lock();
        if !stored.contains_key(&reservation.id) {
            return Err(DomainError::ReservationNotFound(reservation.id));
        }
        Self::ensure_available(&stored, reservation)?;
        stored.insert(reservation.id, reservation.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.reservations
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ReservationNotFound(id))
    }
}

// ============================================================================
// Harness
// ============================================================================

pub const GUEST: Snowflake = Snowflake::new(1001);
pub const OTHER_GUEST: Snowflake = Snowflake::new(1002);
pub const CABIN: Snowflake = Snowflake::new(2001);
pub const LOFT: Snowflake = Snowflake::new(2002);

/// Nightly rate of the cabin
pub const CABIN_RATE: f64 = 100.0;

pub struct Harness {
    pub ctx: ServiceContext,
    pub clock: Arc<FixedClock>,
    pub properties: Arc<InMemoryPropertyRepository>,
    pub reservations: Arc<InMemoryReservationRepository>,
}

/// 2030-01-01 12:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
}

/// Midnight `days` after the harness clock's starting day
pub fn day(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
}

impl Harness {
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::new(now()));
        let properties = Arc::new(InMemoryPropertyRepository::default());
        let reservations = Arc::new(InMemoryReservationRepository::default());

        let host = Snowflake::new(9);
        properties.insert(Property::new(CABIN, host, "Lakeside cabin".into(), Money::new(CABIN_RATE)));
        properties.insert(Property::new(LOFT, host, "City loft".into(), Money::new(250.0)));

        let ctx = ServiceContextBuilder::new()
            .property_repo(properties.clone())
            .reservation_repo(reservations.clone())
            .clock(clock.clone())
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(7)))
            .build()
            .unwrap();

        Self {
            ctx,
            clock,
            properties,
            reservations,
        }
    }
}

/// Request for `nights` nights at `property_id` starting on `day(from)`
pub fn stay(property_id: Snowflake, from: i64, nights: i64) -> CreateReservationRequest {
    CreateReservationRequest {
        property_id,
        start_date: day(from),
        end_date: day(from + nights),
        guest_count: 2,
        special_requests: None,
    }
}
