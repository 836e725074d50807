pub mod attendance;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
pub mod student;

pub mod prelude {
    pub use crate::attendance::Attendance as AttendanceEntity;
    pub use crate::event::Event as EventEntity;
    pub use crate::feedback::{
        Feedback as FeedbackEntity, InvalidRating, Rating,
    };
    pub use crate::registration::{
        AttendanceSheetRow, Registration as RegistrationEntity,
    };
    pub use crate::report::{
        AttendanceReport, FeedbackReport, RegistrationReport,
    };
    pub use crate::student::Student as StudentEntity;
}
