#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RegistrationReport {
    pub event_id: i32,
    pub event_name: String,
    pub total_registrations: i64,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct AttendanceReport {
    pub event_id: i32,
    pub event_name: String,
    /// `None` when nobody registered.
    pub attendance_percentage: Option<f64>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct FeedbackReport {
    pub event_id: i32,
    pub event_name: String,
    /// `None` until someone rates the event.
    pub average_feedback: Option<f64>,
}
