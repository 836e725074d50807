use crate::{response::ApiResponse, ApiError};

/// Clients send ids as numbers or numeric strings, see the
/// `PickFirst<(_, DisplayFromStr)>` fields. Zero is treated as absent.
pub(crate) fn required_id(id: Option<i32>, message: &str) -> ApiResponse<i32> {
    id.filter(|id| *id != 0)
        .ok_or_else(|| ApiError::ClientError(message.to_string()))
}
