use axum::{extract::State, http::StatusCode};
use repository::Repository;

use crate::response::{ApiResponse, IntoApiResponse};

/// 200 while the database answers, 500 otherwise.
pub(super) async fn get_health(
    State(repo): State<Repository>,
) -> ApiResponse<StatusCode> {
    repo.ping().await.into_response("Database unavailable")?;

    Ok(StatusCode::OK)
}
