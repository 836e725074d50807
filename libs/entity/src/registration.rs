#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Registration {
    pub id: i32,
    pub event_id: i32,
    pub student_id: i32,
}

/// One line of the attendance sheet an organizer fills in for an event.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct AttendanceSheetRow {
    pub registration_id: i32,
    pub student_name: String,
    pub present: bool,
}
