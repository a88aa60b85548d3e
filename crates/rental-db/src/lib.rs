//! # rental-db
//!
//! Database layer implementing the booking repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The expected table layout lives in `schema.sql` at the crate root.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::pool::{create_pool, PoolConfig};
//! use rental_db::repositories::PgReservationRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     let reservations = PgReservationRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, PgPool, PoolConfig};
pub use repositories::{PgPropertyRepository, PgReservationRepository};
