use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        EventEntity {
            id: value.id,
            name: value.name,
            event_type: value.r#type,
            date: value.date,
            details: value.details,
        }
    }
}

impl From<EventEntity> for event::ActiveModel {
    fn from(value: EventEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            name: ActiveValue::Set(value.name),
            r#type: ActiveValue::Set(value.event_type),
            date: ActiveValue::Set(value.date),
            details: ActiveValue::Set(value.details),
        }
    }
}

fn validate(event: &EventEntity) -> Response<()> {
    match event.missing_field() {
        Some(field) => Err(RepositoryError::Validation(format!(
            "Missing required field: {field}"
        ))),
        None => Ok(()),
    }
}

impl EventRepository {
    /// Newest first. Dates are text, so this is lexical order.
    pub async fn find_all(&self) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .order_by_desc(event::Column::Date)
            .order_by_desc(event::Column::Id)
            .all(&self.db)
            .await
            .into_response("in find all events")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find event by id")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn create(&self, event: EventEntity) -> Response<i32> {
        validate(&event)?;

        let event = event::ActiveModel {
            id: ActiveValue::not_set(),
            ..event::ActiveModel::from(event)
        };
        let result = Event::insert(event)
            .exec(&self.db)
            .await
            .into_response("in insert event")?;

        info!(task = "create event", id = result.last_insert_id);

        Ok(result.last_insert_id)
    }

    pub async fn update(&self, event: EventEntity) -> Response<()> {
        validate(&event)?;

        let id = event.id;
        let event = event::ActiveModel {
            id: ActiveValue::not_set(),
            ..event::ActiveModel::from(event)
        };
        let result = Event::update_many()
            .set(event)
            .filter(event::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .into_response("in update event")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound("Event not found".into()));
        }

        Ok(())
    }

    /// Registrations of the event and their attendance and feedback go
    /// with it.
    pub async fn delete(&self, id: i32) -> Response<()> {
        let result = Event::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in delete event")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound("Event not found".into()));
        }

        info!(task = "delete event", id);

        Ok(())
    }
}
