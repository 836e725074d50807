use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct RegistrationRepository {
    db: DatabaseConnection,
}

impl RegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<registration::Model> for RegistrationEntity {
    fn from(value: registration::Model) -> Self {
        RegistrationEntity {
            id: value.id,
            event_id: value.event_id,
            student_id: value.student_id,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct AttendanceSheetModel {
    registration_id: i32,
    student_name: String,
    present: Option<bool>,
}

impl From<AttendanceSheetModel> for AttendanceSheetRow {
    fn from(value: AttendanceSheetModel) -> Self {
        AttendanceSheetRow {
            registration_id: value.registration_id,
            student_name: value.student_name,
            present: value.present.unwrap_or_default(),
        }
    }
}

const ALREADY_REGISTERED: &str = "Already registered";

/// Inserts the registration with its attendance (absent) and feedback
/// (unrated) rows. Run it inside a transaction.
async fn insert_with_placeholders<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    event_id: i32,
) -> Response<i32> {
    let registration = registration::ActiveModel {
        id: ActiveValue::not_set(),
        event_id: ActiveValue::Set(event_id),
        student_id: ActiveValue::Set(student_id),
    };
    let registration_id = Registration::insert(registration)
        .exec(db)
        .await
        .into_conflict_response("in insert registration", ALREADY_REGISTERED)?
        .last_insert_id;

    Attendance::insert(attendance::ActiveModel {
        registration_id: ActiveValue::Set(registration_id),
        present: ActiveValue::Set(false),
    })
    .exec(db)
    .await
    .into_response("in insert attendance")?;

    Feedback::insert(feedback::ActiveModel {
        registration_id: ActiveValue::Set(registration_id),
        rating: ActiveValue::Set(None),
        comments: ActiveValue::Set(None),
    })
    .exec(db)
    .await
    .into_response("in insert feedback")?;

    Ok(registration_id)
}

impl RegistrationRepository {
    /// All-or-nothing: the registration, its attendance row and its
    /// feedback row commit together.
    ///
    /// The lookups run before the transaction opens, so its first statement
    /// is the insert and it waits for SQLite's write lock instead of failing
    /// to upgrade a read lock. A duplicate that slips past the lookup is
    /// caught by the unique index and reported the same way.
    pub async fn register(
        &self,
        student_id: i32,
        event_id: i32,
    ) -> Response<i32> {
        let student = Student::find_by_id(student_id)
            .one(&self.db)
            .await
            .into_response("in find student")?;
        if student.is_none() {
            return Err(RepositoryError::NotFound("Invalid student ID".into()));
        }

        let event = Event::find_by_id(event_id)
            .one(&self.db)
            .await
            .into_response("in find event")?;
        if event.is_none() {
            return Err(RepositoryError::NotFound("Invalid event ID".into()));
        }

        let existing = Registration::find()
            .filter(registration::Column::StudentId.eq(student_id))
            .filter(registration::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
            .into_response("in find registration")?;
        if existing.is_some() {
            return Err(RepositoryError::Conflict(ALREADY_REGISTERED.into()));
        }

        let txn = self
            .db
            .begin()
            .await
            .into_response("in begin registration")?;

        let registration_id =
            match insert_with_placeholders(&txn, student_id, event_id).await {
                Ok(registration_id) => registration_id,
                Err(e) => {
                    txn.rollback()
                        .await
                        .into_response("in rollback registration")?;
                    return Err(e);
                }
            };

        txn.commit()
            .await
            .into_response("in commit registration")?;

        info!(
            task = "register",
            registration_id, student_id, event_id
        );

        Ok(registration_id)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Response<Option<RegistrationEntity>> {
        let registration = Registration::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find registration by id")?;

        Ok(registration.map(RegistrationEntity::from))
    }

    pub async fn find_event_ids_by_student(
        &self,
        student_id: i32,
    ) -> Response<Vec<i32>> {
        Registration::find()
            .select_only()
            .column(registration::Column::EventId)
            .filter(registration::Column::StudentId.eq(student_id))
            .order_by_asc(registration::Column::EventId)
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .into_response("in find event ids by student")
    }

    /// Everyone registered for the event, by student name.
    pub async fn find_attendance_sheet(
        &self,
        event_id: i32,
    ) -> Response<Vec<AttendanceSheetRow>> {
        let rows = Registration::find()
            .select_only()
            .column_as(registration::Column::Id, "registration_id")
            .column_as(student::Column::Name, "student_name")
            .column_as(attendance::Column::Present, "present")
            .join(JoinType::InnerJoin, registration::Relation::Student.def())
            .join(
                JoinType::LeftJoin,
                registration::Relation::Attendance.def(),
            )
            .filter(registration::Column::EventId.eq(event_id))
            .order_by_asc(student::Column::Name)
            .into_model::<AttendanceSheetModel>()
            .all(&self.db)
            .await
            .into_response("in find attendance sheet")?;

        Ok(rows.into_iter().map(AttendanceSheetRow::from).collect())
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::insert_with_placeholders;
    use crate::active_models::prelude::*;
    use crate::{test_util::repository, Repository, RepositoryError};

    async fn seed(repo: &Repository) -> (i32, i32) {
        let event_id = repo
            .event
            .create(EventEntity {
                name: "Hack Day".to_string(),
                event_type: "Hackathon".to_string(),
                date: "2024-05-01".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let student_id = repo.student.sign_up("Alice", "pw123").await.unwrap();

        (student_id, event_id)
    }

    #[tokio::test]
    async fn test_register_creates_placeholders() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, event_id) = seed(&repo).await;

        // Act
        let id = repo
            .registration
            .register(student_id, event_id)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            repo.registration.find_by_id(id).await.unwrap(),
            Some(RegistrationEntity {
                id,
                event_id,
                student_id
            })
        );
        assert_eq!(
            repo.attendance.find_by_registration_id(id).await.unwrap(),
            Some(AttendanceEntity {
                registration_id: id,
                present: false
            })
        );
        assert_eq!(
            repo.feedback.find_by_registration_id(id).await.unwrap(),
            Some(FeedbackEntity {
                registration_id: id,
                rating: None,
                comments: None
            })
        );
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, event_id) = seed(&repo).await;
        repo.registration
            .register(student_id, event_id)
            .await
            .unwrap();

        // Act
        let result = repo.registration.register(student_id, event_id).await;

        // Assert
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        let count = Registration::find()
            .count(&repo.registration.db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_conflict() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, event_id) = seed(&repo).await;

        // Act
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.registration.register(student_id, event_id).await
                })
            })
            .collect();
        let mut registered = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => registered += 1,
                Err(RepositoryError::Conflict(message)) => {
                    assert_eq!(message, "Already registered");
                    conflicts += 1;
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        // Assert
        assert_eq!(registered, 1);
        assert_eq!(conflicts, 9);
        let db = &repo.registration.db;
        assert_eq!(Registration::find().count(db).await.unwrap(), 1);
        assert_eq!(Attendance::find().count(db).await.unwrap(), 1);
        assert_eq!(Feedback::find().count(db).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_of_different_students() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (_, event_id) = seed(&repo).await;
        let mut students = Vec::new();
        for i in 0..20 {
            let name = format!("Student {i}");
            students.push(repo.student.sign_up(&name, "pw").await.unwrap());
        }

        // Act
        let handles: Vec<_> = students
            .into_iter()
            .map(|student_id| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.registration.register(student_id, event_id).await
                })
            })
            .collect();
        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        // Assert
        for result in &results {
            assert!(result.is_ok(), "{result:?}");
        }
        let sheet = repo
            .registration
            .find_attendance_sheet(event_id)
            .await
            .unwrap();
        assert_eq!(sheet.len(), 20);
        let db = &repo.registration.db;
        assert_eq!(Attendance::find().count(db).await.unwrap(), 20);
        assert_eq!(Feedback::find().count(db).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_a_conflict() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, event_id) = seed(&repo).await;
        let db = &repo.registration.db;
        insert_with_placeholders(db, student_id, event_id)
            .await
            .unwrap();

        // Act
        let result = insert_with_placeholders(db, student_id, event_id).await;

        // Assert
        assert!(matches!(
            result,
            Err(RepositoryError::Conflict(message)) if message == "Already registered"
        ));
        assert_eq!(Attendance::find().count(db).await.unwrap(), 1);
        assert_eq!(Feedback::find().count(db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_unknown_ids() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, event_id) = seed(&repo).await;

        // Act
        let no_student = repo.registration.register(99, event_id).await;
        let no_event = repo.registration.register(student_id, 99).await;

        // Assert
        assert!(matches!(
            no_student,
            Err(RepositoryError::NotFound(message)) if message == "Invalid student ID"
        ));
        assert!(matches!(
            no_event,
            Err(RepositoryError::NotFound(message)) if message == "Invalid event ID"
        ));
        assert_eq!(
            Registration::find()
                .count(&repo.registration.db)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_find_event_ids_by_student() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (student_id, first) = seed(&repo).await;
        let second = repo
            .event
            .create(EventEntity {
                name: "Rust Workshop".to_string(),
                event_type: "Workshop".to_string(),
                date: "2024-06-01".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        repo.registration.register(student_id, second).await.unwrap();
        repo.registration.register(student_id, first).await.unwrap();

        // Act
        let ids = repo
            .registration
            .find_event_ids_by_student(student_id)
            .await
            .unwrap();

        // Assert
        assert_eq!(ids, vec![first, second]);
        assert!(repo
            .registration
            .find_event_ids_by_student(99)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_find_attendance_sheet_orders_by_name() {
        // Arrange
        let (repo, _dir) = repository().await;
        let (alice, event_id) = seed(&repo).await;
        let zoe = repo.student.sign_up("Zoe", "pw").await.unwrap();
        let bob = repo.student.sign_up("Bob", "pw").await.unwrap();
        let zoe_registration =
            repo.registration.register(zoe, event_id).await.unwrap();
        repo.registration.register(alice, event_id).await.unwrap();
        repo.registration.register(bob, event_id).await.unwrap();
        repo.attendance.mark(zoe_registration, true).await.unwrap();

        // Act
        let sheet = repo
            .registration
            .find_attendance_sheet(event_id)
            .await
            .unwrap();

        // Assert
        let names: Vec<_> =
            sheet.iter().map(|row| row.student_name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Zoe"]);
        assert_eq!(
            sheet[2],
            AttendanceSheetRow {
                registration_id: zoe_registration,
                student_name: "Zoe".to_string(),
                present: true,
            }
        );
        assert!(!sheet[0].present);
    }
}
