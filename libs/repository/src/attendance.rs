use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct AttendanceRepository {
    db: DatabaseConnection,
}

impl AttendanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<attendance::Model> for AttendanceEntity {
    fn from(value: attendance::Model) -> Self {
        AttendanceEntity {
            registration_id: value.registration_id,
            present: value.present,
        }
    }
}

impl AttendanceRepository {
    pub async fn find_by_registration_id(
        &self,
        registration_id: i32,
    ) -> Response<Option<AttendanceEntity>> {
        let attendance = Attendance::find_by_id(registration_id)
            .one(&self.db)
            .await
            .into_response("in find attendance by registration id")?;

        Ok(attendance.map(AttendanceEntity::from))
    }

    /// Returns the number of rows touched, zero for an unknown
    /// registration.
    pub async fn mark(
        &self,
        registration_id: i32,
        present: bool,
    ) -> Response<u64> {
        let result = Attendance::update_many()
            .col_expr(attendance::Column::Present, Expr::value(present))
            .filter(attendance::Column::RegistrationId.eq(registration_id))
            .exec(&self.db)
            .await
            .into_response("in mark attendance")?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use crate::test_util::repository;

    #[tokio::test]
    async fn test_mark() {
        // Arrange
        let (repo, _dir) = repository().await;
        let event_id = repo
            .event
            .create(EventEntity {
                name: "Tech Talk".to_string(),
                event_type: "Tech Talk".to_string(),
                date: "2024-09-10".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let student_id = repo.student.sign_up("Alice", "pw123").await.unwrap();
        let id = repo
            .registration
            .register(student_id, event_id)
            .await
            .unwrap();

        // Act
        let marked = repo.attendance.mark(id, true).await.unwrap();
        let present = repo.attendance.find_by_registration_id(id).await;
        repo.attendance.mark(id, false).await.unwrap();
        let absent = repo.attendance.find_by_registration_id(id).await;

        // Assert
        assert_eq!(marked, 1);
        assert!(present.unwrap().unwrap().present);
        assert!(!absent.unwrap().unwrap().present);
    }

    #[tokio::test]
    async fn test_mark_unknown_registration_is_a_no_op() {
        let (repo, _dir) = repository().await;

        let marked = repo.attendance.mark(7, true).await.unwrap();

        assert_eq!(marked, 0);
        assert_eq!(
            repo.attendance.find_by_registration_id(7).await.unwrap(),
            None
        );
    }
}
