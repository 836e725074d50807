use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use entity::prelude::*;
use repository::Repository;

pub mod request;
pub mod response;

use crate::request::required_id;
use crate::response::{
    ApiResponse, CreatedResp, IntoApiResponse, MessageResp,
};
use crate::ApiError;

use self::{
    request::{DeleteEventRequest, PostEventRequest, PutEventRequest},
    response::EventResp,
};

/// List all events, latest date first
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "List all events successfully", body = [EventResp])
    )
)]
pub async fn get_events(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let events = repo
        .event
        .find_all()
        .await
        .into_response("Error fetching events")?;

    Ok(Json(events.into_iter().map(EventResp::from).collect()))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    request_body = PostEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreatedResp),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn post_event(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<PostEventRequest>,
        ApiError,
    >,
) -> ApiResponse<(StatusCode, Json<CreatedResp>)> {
    let id = repo
        .event
        .create(EventEntity {
            name: body.name,
            event_type: body.event_type,
            date: body.date,
            details: body.details.unwrap_or_default(),
            ..Default::default()
        })
        .await
        .into_response("Error creating event")?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResp {
            message: "Event created".to_string(),
            id,
        }),
    ))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/events",
    request_body = PutEventRequest,
    responses(
        (status = 200, description = "Event updated", body = MessageResp),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn put_event(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<PutEventRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<MessageResp>> {
    let id = required_id(body.id, "Missing fields")?;

    repo.event
        .update(EventEntity {
            id,
            name: body.name,
            event_type: body.event_type,
            date: body.date,
            details: body.details.unwrap_or_default(),
        })
        .await
        .into_response("Error updating event")?;

    Ok(Json(MessageResp::new("Event updated")))
}

/// Delete an event together with its registrations
#[utoipa::path(
    delete,
    path = "/events",
    request_body = DeleteEventRequest,
    responses(
        (status = 200, description = "Event deleted", body = MessageResp),
        (status = 400, description = "Missing id"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<DeleteEventRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<MessageResp>> {
    let id = required_id(body.id, "Missing id")?;

    repo.event
        .delete(id)
        .await
        .into_response("Error deleting event")?;

    Ok(Json(MessageResp::new("Deleted")))
}
