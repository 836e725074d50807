use axum::Json;
use utoipa::OpenApi;

use crate::{
    attendance, event, feedback, registration, report,
    response::{CreatedResp, MessageResp},
    student,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        event::get_events,
        event::post_event,
        event::put_event,
        event::delete_event,
        student::get_students,
        student::post_student,
        student::post_login,
        registration::post_register,
        registration::get_registrations,
        attendance::post_attendance,
        feedback::post_feedback,
        report::get_registrations_report,
        report::get_attendance_report,
        report::get_feedback_report,
    ),
    components(schemas(
        CreatedResp,
        MessageResp,
        event::request::PostEventRequest,
        event::request::PutEventRequest,
        event::request::DeleteEventRequest,
        event::response::EventResp,
        student::request::CredentialsRequest,
        student::response::StudentResp,
        student::response::LoginResp,
        registration::request::PostRegisterRequest,
        registration::response::RegisterResp,
        registration::response::AttendanceSheetResp,
        attendance::request::PostAttendanceRequest,
        feedback::request::PostFeedbackRequest,
        report::response::RegistrationReportResp,
        report::response::AttendanceReportResp,
        report::response::FeedbackReportResp,
    )),
    tags(
        (name = "campus-pulse", description = "Campus events, registrations, attendance and feedback")
    )
)]
pub struct ApiDoc;

pub(super) async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
