// Question follow repository implementation

use crate::db::repositories::queries::question_follow_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Question, QuestionFollow, User};
use tracing::instrument;

/// Repository for the follow join between users and questions
///
/// Powers the follower-side accessors: who follows a question, which
/// questions a user follows, and the most-followed ranking.
#[derive(Clone)]
pub struct QuestionFollowRepository {
    pool: DbPool,
}

impl QuestionFollowRepository {
    /// Create a new QuestionFollowRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find one follow record by its composite identity
    #[instrument(skip(self))]
    pub async fn find_by_ids(
        &self,
        user_id: i64,
        question_id: i64,
    ) -> Result<Option<QuestionFollow>, DatabaseError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 AND question_id = $2",
            question_follow_queries::SELECT_ALL_COLUMNS,
            question_follow_queries::TABLE
        );

        let follow = sqlx::query_as::<_, QuestionFollow>(&query)
            .bind(user_id)
            .bind(question_id)
            .fetch_optional(self.pool.pool())
            .await?;

        Ok(follow)
    }

    /// Find all users following the given question
    #[instrument(skip(self))]
    pub async fn followers_for_question(
        &self,
        question_id: i64,
    ) -> Result<Vec<User>, DatabaseError> {
        let followers = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.fname, u.lname
            FROM users u
            INNER JOIN questions_follows qf ON qf.user_id = u.id
            WHERE qf.question_id = $1
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(
            question_id = question_id,
            count = followers.len(),
            "Found followers"
        );
        Ok(followers)
    }

    /// Find all questions the given user follows
    #[instrument(skip(self))]
    pub async fn followed_questions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.id, q.title, q.body, q.user_id
            FROM questions q
            INNER JOIN questions_follows qf ON qf.question_id = q.id
            WHERE qf.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(questions)
    }

    /// Rank questions by follower count, most followed first
    ///
    /// Questions with no followers do not appear. Ties break on ascending
    /// question id so the ranking is deterministic.
    #[instrument(skip(self))]
    pub async fn most_followed_questions(&self, n: i64) -> Result<Vec<Question>, DatabaseError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.id, q.title, q.body, q.user_id
            FROM questions q
            INNER JOIN questions_follows qf ON qf.question_id = q.id
            GROUP BY q.id
            ORDER BY COUNT(qf.user_id) DESC, q.id ASC
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(questions)
    }
}
