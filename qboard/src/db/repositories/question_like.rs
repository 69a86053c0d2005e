// Question like repository implementation

use crate::db::repositories::queries::question_like_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Question, QuestionLike, User};
use tracing::instrument;

/// Repository for the like join between users and questions
///
/// Powers the like-side accessors: who liked a question, like counts,
/// which questions a user liked, and the most-liked ranking.
#[derive(Clone)]
pub struct QuestionLikeRepository {
    pool: DbPool,
}

impl QuestionLikeRepository {
    /// Create a new QuestionLikeRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find one like record by its composite identity
    #[instrument(skip(self))]
    pub async fn find_by_ids(
        &self,
        user_id: i64,
        question_id: i64,
    ) -> Result<Option<QuestionLike>, DatabaseError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 AND question_id = $2",
            question_like_queries::SELECT_ALL_COLUMNS,
            question_like_queries::TABLE
        );

        let like = sqlx::query_as::<_, QuestionLike>(&query)
            .bind(user_id)
            .bind(question_id)
            .fetch_optional(self.pool.pool())
            .await?;

        Ok(like)
    }

    /// Find all users who liked the given question
    #[instrument(skip(self))]
    pub async fn likers_for_question(&self, question_id: i64) -> Result<Vec<User>, DatabaseError> {
        let likers = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.fname, u.lname
            FROM users u
            INNER JOIN questions_likes ql ON ql.user_id = u.id
            WHERE ql.question_id = $1
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(
            question_id = question_id,
            count = likers.len(),
            "Found likers"
        );
        Ok(likers)
    }

    /// Count the like records for the given question
    ///
    /// A question nobody liked counts 0; the result is never absent.
    #[instrument(skip(self))]
    pub async fn num_likes_for_question(&self, question_id: i64) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(user_id)
            FROM questions_likes
            WHERE question_id = $1
            "#,
        )
        .bind(question_id)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(count)
    }

    /// Find all questions the given user liked
    #[instrument(skip(self))]
    pub async fn liked_questions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.id, q.title, q.body, q.user_id
            FROM questions q
            INNER JOIN questions_likes ql ON ql.question_id = q.id
            WHERE ql.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(questions)
    }

    /// Rank questions by like count, most liked first
    ///
    /// Questions with no likes do not appear. Ties break on ascending
    /// question id so the ranking is deterministic.
    #[instrument(skip(self))]
    pub async fn most_liked_questions(&self, n: i64) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.id, q.title, q.body, q.user_id
            FROM questions q
            INNER JOIN questions_likes ql ON ql.question_id = q.id
            GROUP BY q.id
            ORDER BY COUNT(ql.user_id) DESC, q.id ASC
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(questions)
    }
}
