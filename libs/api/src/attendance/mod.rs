use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use repository::Repository;

pub mod request;

use crate::request::required_id;
use crate::response::{ApiResponse, IntoApiResponse, MessageResp};
use crate::ApiError;

use self::request::PostAttendanceRequest;

/// Mark a registrant present or absent
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = PostAttendanceRequest,
    responses(
        (status = 200, description = "Attendance updated", body = MessageResp),
        (status = 400, description = "Missing parameters")
    )
)]
pub async fn post_attendance(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<PostAttendanceRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<MessageResp>> {
    let registration_id =
        required_id(body.registration_id, "Missing parameters")?;
    let Some(present) = body.present else {
        return Err(ApiError::ClientError("Missing parameters".to_string()));
    };

    repo.attendance
        .mark(registration_id, present)
        .await
        .into_response("Error updating attendance")?;

    Ok(Json(MessageResp::new("Attendance updated")))
}
