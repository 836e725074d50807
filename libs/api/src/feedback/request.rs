use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

use crate::{response::ApiResponse, ApiError};

#[serde_as]
#[derive(Deserialize, ToSchema)]
pub struct PostFeedbackRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub registration_id: Option<i32>,
    /// A whole number from 1 to 5. Number inputs may send `4.0`, which
    /// reads as `4`.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating: Option<f64>,
    pub comments: Option<String>,
}

impl PostFeedbackRequest {
    /// The rating as an integer. Range checks happen in the repository.
    pub fn whole_rating(&self) -> ApiResponse<Option<i64>> {
        match self.rating {
            None => Ok(None),
            Some(rating) if rating.fract() == 0.0 && rating.is_finite() => {
                Ok(Some(rating as i64))
            }
            Some(rating) => Err(ApiError::ClientError(format!(
                "rating must be a whole number, got {rating}"
            ))),
        }
    }
}
