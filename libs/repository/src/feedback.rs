use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct FeedbackRepository {
    db: DatabaseConnection,
}

impl FeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<feedback::Model> for FeedbackEntity {
    fn from(value: feedback::Model) -> Self {
        FeedbackEntity {
            registration_id: value.registration_id,
            // the column carries a CHECK constraint on the same range
            rating: value
                .rating
                .and_then(|rating| Rating::try_from(i64::from(rating)).ok()),
            comments: value.comments,
        }
    }
}

impl FeedbackRepository {
    pub async fn find_by_registration_id(
        &self,
        registration_id: i32,
    ) -> Response<Option<FeedbackEntity>> {
        let feedback = Feedback::find_by_id(registration_id)
            .one(&self.db)
            .await
            .into_response("in find feedback by registration id")?;

        Ok(feedback.map(FeedbackEntity::from))
    }

    /// Overwrites rating and comments. Blank comments are stored as null.
    /// Returns the number of rows touched, zero for an unknown
    /// registration.
    pub async fn submit(
        &self,
        registration_id: i32,
        rating: Option<i64>,
        comments: Option<String>,
    ) -> Response<u64> {
        let Some(rating) = rating else {
            return Err(RepositoryError::Validation(
                "Missing rating".into(),
            ));
        };
        let rating = Rating::try_from(rating)
            .map_err(|e| RepositoryError::Validation(e.to_string()))?;
        let comments = comments.filter(|comments| !comments.is_empty());

        let result = Feedback::update_many()
            .col_expr(feedback::Column::Rating, Expr::value(rating.value()))
            .col_expr(feedback::Column::Comments, Expr::value(comments))
            .filter(feedback::Column::RegistrationId.eq(registration_id))
            .exec(&self.db)
            .await
            .into_response("in submit feedback")?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use crate::{test_util::repository, Repository, RepositoryError};

    async fn registration(repo: &Repository) -> i32 {
        let event_id = repo
            .event
            .create(EventEntity {
                name: "Rust Workshop".to_string(),
                event_type: "Workshop".to_string(),
                date: "2024-06-01".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let student_id = repo.student.sign_up("Alice", "pw123").await.unwrap();

        repo.registration
            .register(student_id, event_id)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_rating_bounds() {
        // Arrange
        let (repo, _dir) = repository().await;
        let id = registration(&repo).await;

        // Act
        let zero = repo.feedback.submit(id, Some(0), None).await;
        let six = repo.feedback.submit(id, Some(6), None).await;
        let missing = repo.feedback.submit(id, None, None).await;
        let one = repo.feedback.submit(id, Some(1), None).await;
        let five = repo.feedback.submit(id, Some(5), None).await;

        // Assert
        assert!(matches!(zero, Err(RepositoryError::Validation(_))));
        assert!(matches!(six, Err(RepositoryError::Validation(_))));
        assert!(matches!(missing, Err(RepositoryError::Validation(_))));
        assert_eq!(one.unwrap(), 1);
        assert_eq!(five.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_submit_overwrites() {
        // Arrange
        let (repo, _dir) = repository().await;
        let id = registration(&repo).await;
        repo.feedback
            .submit(id, Some(2), Some("too short".to_string()))
            .await
            .unwrap();

        // Act
        repo.feedback
            .submit(id, Some(4), Some(String::new()))
            .await
            .unwrap();

        // Assert
        let feedback = repo
            .feedback
            .find_by_registration_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(feedback.rating.map(Rating::value), Some(4));
        assert_eq!(feedback.comments, None);
    }

    #[tokio::test]
    async fn test_invalid_rating_leaves_feedback_untouched() {
        let (repo, _dir) = repository().await;
        let id = registration(&repo).await;

        let result =
            repo.feedback.submit(id, Some(9), Some("great".into())).await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        let feedback = repo.feedback.find_by_registration_id(id).await;
        assert_eq!(
            feedback.unwrap(),
            Some(FeedbackEntity {
                registration_id: id,
                rating: None,
                comments: None
            })
        );
    }
}
