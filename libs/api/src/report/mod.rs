use axum::{extract::State, Json};
use repository::Repository;

pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};

use self::response::{
    AttendanceReportResp, FeedbackReportResp, RegistrationReportResp,
};

/// Registrations per event, most popular first
#[utoipa::path(
    get,
    path = "/reports/registrations",
    responses(
        (status = 200, description = "Registration counts", body = [RegistrationReportResp])
    )
)]
pub async fn get_registrations_report(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<RegistrationReportResp>>> {
    let report = repo
        .report
        .registrations()
        .await
        .into_response("Error fetching registration report")?;

    Ok(Json(
        report.into_iter().map(RegistrationReportResp::from).collect(),
    ))
}

/// Share of registrants marked present, per event
#[utoipa::path(
    get,
    path = "/reports/attendance",
    responses(
        (status = 200, description = "Attendance percentages", body = [AttendanceReportResp])
    )
)]
pub async fn get_attendance_report(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<AttendanceReportResp>>> {
    let report = repo
        .report
        .attendance()
        .await
        .into_response("Error fetching attendance report")?;

    Ok(Json(report.into_iter().map(AttendanceReportResp::from).collect()))
}

/// Average rating per event
#[utoipa::path(
    get,
    path = "/reports/feedback",
    responses(
        (status = 200, description = "Average ratings", body = [FeedbackReportResp])
    )
)]
pub async fn get_feedback_report(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<FeedbackReportResp>>> {
    let report = repo
        .report
        .feedback()
        .await
        .into_response("Error fetching feedback report")?;

    Ok(Json(report.into_iter().map(FeedbackReportResp::from).collect()))
}
