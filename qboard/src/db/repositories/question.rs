// Question repository implementation

use crate::db::repositories::queries::question_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Question, User};
use tracing::instrument;

/// Repository for question-related database operations
#[derive(Clone)]
pub struct QuestionRepository {
    pool: DbPool,
}

impl QuestionRepository {
    /// Create a new QuestionRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find a question by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Question>, DatabaseError> {
        super::fetch_by_id(
            &self.pool,
            question_queries::TABLE,
            question_queries::SELECT_ALL_COLUMNS,
            id,
        )
        .await
    }

    /// Find all questions, in storage order
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, body, user_id
            FROM questions
            "#,
        )
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(count = questions.len(), "Found questions");
        Ok(questions)
    }

    /// Find all questions authored by the given user
    #[instrument(skip(self))]
    pub async fn find_by_author_id(&self, user_id: i64) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, body, user_id
            FROM questions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(questions)
    }

    /// Resolve the user who authored a question
    ///
    /// Returns `Ok(None)` if the author row has vanished from the store.
    #[instrument(skip(self, question), fields(question_id = question.id))]
    pub async fn author(&self, question: &Question) -> Result<Option<User>, DatabaseError> {
        let author = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fname, lname
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(question.user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::test_fixtures::setup_board;

    #[tokio::test]
    async fn test_find_by_id_returns_matching_question() {
        let (_dir, pool) = setup_board().await;
        let repo = QuestionRepository::new(pool);

        let question = repo.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(question.id, 3);
        assert_eq!(question.title, "Halting problem?");
        assert_eq!(question.user_id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_none() {
        let (_dir, pool) = setup_board().await;
        let repo = QuestionRepository::new(pool);

        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all() {
        let (_dir, pool) = setup_board().await;
        let repo = QuestionRepository::new(pool);

        let questions = repo.find_all().await.unwrap();
        assert_eq!(questions.len(), 4);

        let mut ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_find_by_author_id() {
        let (_dir, pool) = setup_board().await;
        let repo = QuestionRepository::new(pool);

        let questions = repo.find_by_author_id(1).await.unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.user_id == 1));

        assert!(repo.find_by_author_id(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_author_resolution() {
        let (_dir, pool) = setup_board().await;
        let repo = QuestionRepository::new(pool);

        let question = repo.find_by_id(4).await.unwrap().unwrap();
        let author = repo.author(&question).await.unwrap().unwrap();
        assert_eq!(author.id, Some(3));
        assert_eq!(author.fname, "Grace");
    }
}
