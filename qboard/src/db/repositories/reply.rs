// Reply repository implementation

use crate::db::repositories::queries::{question_queries, reply_queries};
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Question, Reply, User};
use tracing::instrument;

/// Repository for reply-related database operations
///
/// Replies form a tree per question: `parent_reply_id` is NULL for
/// top-level replies and points at another reply otherwise.
#[derive(Clone)]
pub struct ReplyRepository {
    pool: DbPool,
}

impl ReplyRepository {
    /// Create a new ReplyRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find a reply by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Reply>, DatabaseError> {
        super::fetch_by_id(
            &self.pool,
            reply_queries::TABLE,
            reply_queries::SELECT_ALL_COLUMNS,
            id,
        )
        .await
    }

    /// Find all replies authored by the given user
    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Reply>, DatabaseError> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, body, user_id, parent_reply_id
            FROM replies
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(replies)
    }

    /// Find all replies on the given question
    #[instrument(skip(self))]
    pub async fn find_by_question_id(&self, question_id: i64) -> Result<Vec<Reply>, DatabaseError> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, body, user_id, parent_reply_id
            FROM replies
            WHERE question_id = $1
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(replies)
    }

    /// Resolve the user who authored a reply
    #[instrument(skip(self, reply), fields(reply_id = reply.id))]
    pub async fn author(&self, reply: &Reply) -> Result<Option<User>, DatabaseError> {
        let author = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fname, lname
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(reply.user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(author)
    }

    /// Resolve the question a reply belongs to
    #[instrument(skip(self, reply), fields(reply_id = reply.id))]
    pub async fn question(&self, reply: &Reply) -> Result<Option<Question>, DatabaseError> {
        super::fetch_by_id(
            &self.pool,
            question_queries::TABLE,
            question_queries::SELECT_ALL_COLUMNS,
            reply.question_id,
        )
        .await
    }

    /// Resolve the parent of a reply
    ///
    /// Top-level replies have no parent; this returns `Ok(None)` without
    /// touching the store rather than binding a NULL parameter.
    #[instrument(skip(self, reply), fields(reply_id = reply.id))]
    pub async fn parent_reply(&self, reply: &Reply) -> Result<Option<Reply>, DatabaseError> {
        let parent_id = match reply.parent_reply_id {
            Some(parent_id) => parent_id,
            None => return Ok(None),
        };

        self.find_by_id(parent_id).await
    }

    /// Find all direct children of a reply
    #[instrument(skip(self, reply), fields(reply_id = reply.id))]
    pub async fn child_replies(&self, reply: &Reply) -> Result<Vec<Reply>, DatabaseError> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, body, user_id, parent_reply_id
            FROM replies
            WHERE parent_reply_id = $1
            "#,
        )
        .bind(reply.id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(replies)
    }
}
