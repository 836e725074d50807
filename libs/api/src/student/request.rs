use serde::Deserialize;
use utoipa::ToSchema;

/// Body of both signup and login.
#[derive(Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}
