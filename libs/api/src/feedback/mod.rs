use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use repository::Repository;

pub mod request;

use crate::request::required_id;
use crate::response::{ApiResponse, IntoApiResponse, MessageResp};
use crate::ApiError;

use self::request::PostFeedbackRequest;

/// Rate an event and leave a comment
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = PostFeedbackRequest,
    responses(
        (status = 200, description = "Feedback submitted", body = MessageResp),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn post_feedback(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<PostFeedbackRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<MessageResp>> {
    let registration_id = required_id(body.registration_id, "Invalid input")?;
    let rating = body.whole_rating()?;

    repo.feedback
        .submit(registration_id, rating, body.comments)
        .await
        .into_response("Error submitting feedback")?;

    Ok(Json(MessageResp::new("Feedback submitted")))
}
