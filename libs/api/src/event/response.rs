use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EventResp {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: String,
    pub details: String,
}

impl From<EventEntity> for EventResp {
    fn from(value: EventEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            event_type: value.event_type,
            date: value.date,
            details: value.details,
        }
    }
}
