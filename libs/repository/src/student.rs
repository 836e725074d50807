use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::credential::{hash_password, verify_password};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<student::Model> for StudentEntity {
    fn from(value: student::Model) -> Self {
        StudentEntity {
            id: value.id,
            name: value.name,
            password_hash: value.password_hash,
        }
    }
}

/// Presence only: whitespace counts, as it does for event fields.
fn require_credentials(name: &str, password: &str) -> Response<()> {
    if name.is_empty() || password.is_empty() {
        return Err(RepositoryError::Validation("Missing fields".into()));
    }

    Ok(())
}

impl StudentRepository {
    pub async fn find_all(&self) -> Response<Vec<StudentEntity>> {
        let students = Student::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .into_response("in find all students")?;

        Ok(students.into_iter().map(StudentEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Response<Option<StudentEntity>> {
        let student = Student::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find student by id")?;

        Ok(student.map(StudentEntity::from))
    }

    /// Names are matched exactly, case included.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Response<Option<StudentEntity>> {
        let student = Student::find()
            .filter(student::Column::Name.eq(name))
            .one(&self.db)
            .await
            .into_response("in find student by name")?;

        Ok(student.map(StudentEntity::from))
    }

    pub async fn sign_up(&self, name: &str, password: &str) -> Response<i32> {
        require_credentials(name, password)?;

        if self.find_by_name(name).await?.is_some() {
            return Err(RepositoryError::Conflict("account exists".into()));
        }

        let student = student::ActiveModel {
            id: ActiveValue::not_set(),
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(hash_password(password)?),
        };
        let result = Student::insert(student)
            .exec(&self.db)
            .await
            .into_conflict_response("in insert student", "account exists")?;

        info!(task = "sign up", id = result.last_insert_id);

        Ok(result.last_insert_id)
    }

    pub async fn log_in(&self, name: &str, password: &str) -> Response<i32> {
        require_credentials(name, password)?;

        let Some(student) = self.find_by_name(name).await? else {
            return Err(RepositoryError::NotFound("Account not found".into()));
        };

        if !verify_password(password, &student.password_hash)? {
            return Err(RepositoryError::InvalidCredentials);
        }

        Ok(student.id)
    }
}

#[cfg(test)]
mod test {
    use crate::{test_util::repository, RepositoryError};

    #[tokio::test]
    async fn test_sign_up_then_log_in() {
        // Arrange
        let (repo, _dir) = repository().await;

        // Act
        let signed_up = repo.student.sign_up("Alice", "pw123").await.unwrap();
        let first = repo.student.log_in("Alice", "pw123").await.unwrap();
        let second = repo.student.log_in("Alice", "pw123").await.unwrap();

        // Assert
        assert_eq!(signed_up, 1);
        assert_eq!(first, signed_up);
        assert_eq!(second, signed_up);
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plaintext() {
        let (repo, _dir) = repository().await;
        let id = repo.student.sign_up("Alice", "pw123").await.unwrap();

        let student = repo.student.find_by_id(id).await.unwrap().unwrap();

        assert_ne!(student.password_hash, "pw123");
        assert!(!student.password_hash.contains("pw123"));
    }

    #[tokio::test]
    async fn test_sign_up_twice_conflicts() {
        // Arrange
        let (repo, _dir) = repository().await;
        repo.student.sign_up("Alice", "pw123").await.unwrap();

        // Act
        let result = repo.student.sign_up("Alice", "another").await;

        // Assert
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        assert_eq!(repo.student.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let (repo, _dir) = repository().await;
        let alice = repo.student.sign_up("Alice", "pw123").await.unwrap();

        let lower = repo.student.sign_up("alice", "pw123").await.unwrap();

        assert_ne!(alice, lower);
        assert!(matches!(
            repo.student.log_in("ALICE", "pw123").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_log_in_failures() {
        // Arrange
        let (repo, _dir) = repository().await;
        repo.student.sign_up("Alice", "pw123").await.unwrap();

        // Act
        let unknown = repo.student.log_in("Bob", "pw123").await;
        let wrong = repo.student.log_in("Alice", "pw").await;
        let blank = repo.student.log_in("Alice", "").await;

        // Assert
        assert!(matches!(unknown, Err(RepositoryError::NotFound(_))));
        assert!(matches!(wrong, Err(RepositoryError::InvalidCredentials)));
        assert!(matches!(blank, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_sign_up_requires_fields() {
        let (repo, _dir) = repository().await;

        let no_name = repo.student.sign_up("", "pw123").await;
        let no_password = repo.student.sign_up("Alice", "").await;

        assert!(matches!(no_name, Err(RepositoryError::Validation(_))));
        assert!(matches!(no_password, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_whitespace_counts_as_present() {
        let (repo, _dir) = repository().await;

        let id = repo.student.sign_up("  ", "pw").await.unwrap();

        assert_eq!(repo.student.log_in("  ", "pw").await.unwrap(), id);
    }
}
