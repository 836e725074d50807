//! Per-event aggregates for the organizer dashboard. Every event shows up
//! in every report, registered or not.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, Statement,
};

use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct RegistrationReportModel {
    event_id: i32,
    event_name: String,
    total_registrations: i64,
}

#[derive(Debug, FromQueryResult)]
struct AttendanceReportModel {
    event_id: i32,
    event_name: String,
    attendance_percentage: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct FeedbackReportModel {
    event_id: i32,
    event_name: String,
    average_feedback: Option<f64>,
}

impl From<RegistrationReportModel> for RegistrationReport {
    fn from(value: RegistrationReportModel) -> Self {
        RegistrationReport {
            event_id: value.event_id,
            event_name: value.event_name,
            total_registrations: value.total_registrations,
        }
    }
}

impl From<AttendanceReportModel> for AttendanceReport {
    fn from(value: AttendanceReportModel) -> Self {
        AttendanceReport {
            event_id: value.event_id,
            event_name: value.event_name,
            attendance_percentage: value.attendance_percentage,
        }
    }
}

impl From<FeedbackReportModel> for FeedbackReport {
    fn from(value: FeedbackReportModel) -> Self {
        FeedbackReport {
            event_id: value.event_id,
            event_name: value.event_name,
            average_feedback: value.average_feedback,
        }
    }
}

const REGISTRATIONS: &str = r#"
SELECT e.id AS event_id,
       e.name AS event_name,
       COUNT(r.id) AS total_registrations
FROM event e
LEFT JOIN registration r ON r.event_id = e.id
GROUP BY e.id, e.name
ORDER BY total_registrations DESC, e.id ASC
"#;

// A missing attendance row counts as absent. No registrations gives NULL
// rather than a division by zero.
const ATTENDANCE: &str = r#"
SELECT e.id AS event_id,
       e.name AS event_name,
       CASE
           WHEN COUNT(r.id) = 0 THEN NULL
           ELSE SUM(CASE WHEN a.present THEN 1 ELSE 0 END) * 100.0
                / COUNT(r.id)
       END AS attendance_percentage
FROM event e
LEFT JOIN registration r ON r.event_id = e.id
LEFT JOIN attendance a ON a.registration_id = r.id
GROUP BY e.id, e.name
ORDER BY e.id ASC
"#;

const FEEDBACK: &str = r#"
SELECT e.id AS event_id,
       e.name AS event_name,
       AVG(f.rating) AS average_feedback
FROM event e
LEFT JOIN registration r ON r.event_id = e.id
LEFT JOIN feedback f ON f.registration_id = r.id
GROUP BY e.id, e.name
ORDER BY e.id ASC
"#;

impl ReportRepository {
    fn statement(&self, sql: &str) -> Statement {
        Statement::from_string(self.db.get_database_backend(), sql)
    }

    pub async fn registrations(&self) -> Response<Vec<RegistrationReport>> {
        let rows = RegistrationReportModel::find_by_statement(
            self.statement(REGISTRATIONS),
        )
        .all(&self.db)
        .await
        .into_response("in registrations report")?;

        Ok(rows.into_iter().map(RegistrationReport::from).collect())
    }

    pub async fn attendance(&self) -> Response<Vec<AttendanceReport>> {
        let rows =
            AttendanceReportModel::find_by_statement(self.statement(ATTENDANCE))
                .all(&self.db)
                .await
                .into_response("in attendance report")?;

        Ok(rows.into_iter().map(AttendanceReport::from).collect())
    }

    pub async fn feedback(&self) -> Response<Vec<FeedbackReport>> {
        let rows =
            FeedbackReportModel::find_by_statement(self.statement(FEEDBACK))
                .all(&self.db)
                .await
                .into_response("in feedback report")?;

        Ok(rows.into_iter().map(FeedbackReport::from).collect())
    }
}
