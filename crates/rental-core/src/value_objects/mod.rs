//! Value objects - immutable types that represent domain concepts

mod money;
mod snowflake;
mod stay_period;

pub use money::Money;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use stay_period::StayPeriod;
