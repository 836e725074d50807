use serde::Deserialize;
use serde_with::{serde_as, BoolFromInt, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

#[serde_as]
#[derive(Deserialize, ToSchema)]
pub struct PostAttendanceRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub registration_id: Option<i32>,
    /// `true`/`false` or `1`/`0`.
    #[serde_as(as = "Option<PickFirst<(_, BoolFromInt)>>")]
    pub present: Option<bool>,
}
