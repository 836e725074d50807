use sea_orm::{DbErr, SqlErr};

use crate::RepositoryError;

pub type Response<T> = Result<T, RepositoryError>;

pub(crate) trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;

    /// Like `into_response`, but a unique constraint violation becomes a
    /// `RepositoryError::Conflict` carrying `conflict`.
    fn into_conflict_response(
        self,
        message: &str,
        conflict: &str,
    ) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }

    fn into_conflict_response(
        self,
        message: &str,
        conflict: &str,
    ) -> Response<T> {
        self.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                RepositoryError::Conflict(conflict.to_string())
            }
            _ => RepositoryError::InSeaOrmDbErr {
                message: message.to_string(),
                source: e,
            },
        })
    }
}
