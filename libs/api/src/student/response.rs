use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct StudentResp {
    pub id: i32,
    pub name: String,
}

impl From<StudentEntity> for StudentResp {
    fn from(value: StudentEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LoginResp {
    pub id: i32,
}
