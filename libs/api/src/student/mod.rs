use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use repository::Repository;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, CreatedResp, IntoApiResponse};
use crate::ApiError;

use self::{
    request::CredentialsRequest,
    response::{LoginResp, StudentResp},
};

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "List all students successfully", body = [StudentResp])
    )
)]
pub async fn get_students(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<StudentResp>>> {
    let students = repo
        .student
        .find_all()
        .await
        .into_response("Error fetching students")?;

    Ok(Json(students.into_iter().map(StudentResp::from).collect()))
}

/// Sign up a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Student added", body = CreatedResp),
        (status = 400, description = "Missing fields or account exists")
    )
)]
pub async fn post_student(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<CredentialsRequest>,
        ApiError,
    >,
) -> ApiResponse<(StatusCode, Json<CreatedResp>)> {
    let id = repo
        .student
        .sign_up(&body.name, &body.password)
        .await
        .into_response("Error adding student")?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResp {
            message: "Student added".to_string(),
            id,
        }),
    ))
}

/// Log in with name and password. There is no session; clients keep the
/// returned id.
#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResp),
        (status = 400, description = "Account not found or incorrect password")
    )
)]
pub async fn post_login(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<
        Json<CredentialsRequest>,
        ApiError,
    >,
) -> ApiResponse<Json<LoginResp>> {
    let id = repo
        .student
        .log_in(&body.name, &body.password)
        .await
        .into_client_response("Error logging in")?;

    Ok(Json(LoginResp { id }))
}
