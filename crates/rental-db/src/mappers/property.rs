//! Property entity <-> model mapper

use rental_core::entities::Property;
use rental_core::value_objects::{Money, Snowflake};

use crate::models::PropertyModel;

impl From<PropertyModel> for Property {
    fn from(model: PropertyModel) -> Self {
        Property {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            title: model.title,
            rate: Money::new(model.rate),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
