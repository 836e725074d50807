#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Attendance {
    pub registration_id: i32,
    pub present: bool,
}
