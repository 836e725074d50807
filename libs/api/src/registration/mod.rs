use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use repository::Repository;

pub mod request;
pub mod response;

use crate::request::required_id;
use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiError;

use self::{
    request::{GetRegistrationsParam, PostRegisterRequest},
    response::{AttendanceSheetResp, GetRegistrationsResp, RegisterResp},
};

/// Register a student for an event
#[utoipa::path(
    post,
    path = "/register",
    request_body = PostRegisterRequest,
    responses(
        (status = 200, description = "Registered successfully", body = RegisterResp),
        (status = 400, description = "Missing or invalid ids, or already registered")
    )
)]
pub async fn post_register(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<PostRegisterRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<RegisterResp>> {
    let student_id = required_id(body.student_id, "Missing parameters")?;
    let event_id = required_id(body.event_id, "Missing parameters")?;

    let registration_id = repo
        .registration
        .register(student_id, event_id)
        .await
        .into_client_response("Error registering")?;

    Ok(Json(RegisterResp {
        message: "Registered successfully".to_string(),
        registration_id,
    }))
}

/// With `event_id`: the attendance sheet of the event. With `student_id`:
/// the ids of the events the student registered for.
#[utoipa::path(
    get,
    path = "/registrations",
    params(GetRegistrationsParam),
    responses(
        (status = 200, description = "Attendance sheet by student name, or event ids", body = [AttendanceSheetResp]),
        (status = 400, description = "Missing event_id")
    )
)]
pub async fn get_registrations(
    State(repo): State<Repository>,
    WithRejection(Query(params), _): WithRejection<
        Query<GetRegistrationsParam>,
        ApiError,
    >,
) -> ApiResponse<Json<GetRegistrationsResp>> {
    if let Some(event_id) = params.event_id {
        let sheet = repo
            .registration
            .find_attendance_sheet(event_id)
            .await
            .into_response("Error fetching registrations")?;

        return Ok(Json(GetRegistrationsResp::AttendanceSheet(
            sheet.into_iter().map(AttendanceSheetResp::from).collect(),
        )));
    }

    let Some(student_id) = params.student_id else {
        return Err(ApiError::ClientError("Missing event_id".to_string()));
    };

    let event_ids = repo
        .registration
        .find_event_ids_by_student(student_id)
        .await
        .into_response("Error fetching registrations")?;

    Ok(Json(GetRegistrationsResp::EventIds(event_ids)))
}
