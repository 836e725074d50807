use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::{IntoParams, ToSchema};

#[serde_as]
#[derive(Deserialize, ToSchema)]
pub struct PostRegisterRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub student_id: Option<i32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub event_id: Option<i32>,
}

/// Exactly one of the two is expected; `event_id` wins when both are set.
#[serde_as]
#[derive(Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRegistrationsParam {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub event_id: Option<i32>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub student_id: Option<i32>,
}
