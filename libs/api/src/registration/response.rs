use entity::prelude::*;
use serde::Serialize;
use serde_with::{serde_as, BoolFromInt};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RegisterResp {
    pub message: String,
    pub registration_id: i32,
}

/// `present` goes out as `0`/`1`, which is what the dashboard reads.
#[serde_as]
#[derive(Serialize, ToSchema)]
pub struct AttendanceSheetResp {
    pub registration_id: i32,
    pub student_name: String,
    #[serde_as(as = "BoolFromInt")]
    #[schema(value_type = u8)]
    pub present: bool,
}

impl From<AttendanceSheetRow> for AttendanceSheetResp {
    fn from(value: AttendanceSheetRow) -> Self {
        Self {
            registration_id: value.registration_id,
            student_name: value.student_name,
            present: value.present,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum GetRegistrationsResp {
    AttendanceSheet(Vec<AttendanceSheetResp>),
    EventIds(Vec<i32>),
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{AttendanceSheetResp, GetRegistrationsResp};

    #[test]
    fn test_serialize_sheet() {
        let resp = GetRegistrationsResp::AttendanceSheet(vec![
            AttendanceSheetResp {
                registration_id: 1,
                student_name: "Alice".to_string(),
                present: false,
            },
        ]);

        assert_eq!(
            serde_json::to_value(resp).unwrap(),
            json!([{"registration_id": 1, "student_name": "Alice", "present": 0}])
        );
    }

    #[test]
    fn test_serialize_event_ids() {
        let resp = GetRegistrationsResp::EventIds(vec![2, 5]);

        assert_eq!(serde_json::to_value(resp).unwrap(), json!([2, 5]));
    }
}
