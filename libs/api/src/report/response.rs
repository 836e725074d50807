use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RegistrationReportResp {
    pub event_id: i32,
    pub event_name: String,
    pub total_registrations: i64,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceReportResp {
    pub event_id: i32,
    pub event_name: String,
    /// `null` for events nobody registered for.
    pub attendance_percentage: Option<f64>,
}

#[derive(Serialize, ToSchema)]
pub struct FeedbackReportResp {
    pub event_id: i32,
    pub event_name: String,
    /// `null` until the first rating.
    pub average_feedback: Option<f64>,
}

impl From<RegistrationReport> for RegistrationReportResp {
    fn from(value: RegistrationReport) -> Self {
        Self {
            event_id: value.event_id,
            event_name: value.event_name,
            total_registrations: value.total_registrations,
        }
    }
}

impl From<AttendanceReport> for AttendanceReportResp {
    fn from(value: AttendanceReport) -> Self {
        Self {
            event_id: value.event_id,
            event_name: value.event_name,
            attendance_percentage: value.attendance_percentage,
        }
    }
}

impl From<FeedbackReport> for FeedbackReportResp {
    fn from(value: FeedbackReport) -> Self {
        Self {
            event_id: value.event_id,
            event_name: value.event_name,
            average_feedback: value.average_feedback,
        }
    }
}
