// Repository layer for database operations

pub mod queries;
pub mod question;
pub mod question_follow;
pub mod question_like;
pub mod reply;
pub mod user;

pub use question::QuestionRepository;
pub use question_follow::QuestionFollowRepository;
pub use question_like::QuestionLikeRepository;
pub use reply::ReplyRepository;
pub use user::UserRepository;

use crate::db::DbPool;
use crate::errors::DatabaseError;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Generic primary-key lookup against a named table
///
/// Every repository's `find_by_id` routes through this: one SELECT shape,
/// typed row extraction chosen by the caller. Returns `Ok(None)` when no
/// row matches.
pub(crate) async fn fetch_by_id<T>(
    pool: &DbPool,
    table: &str,
    columns: &str,
    id: i64,
) -> Result<Option<T>, DatabaseError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let query = format!("SELECT {} FROM {} WHERE id = $1", columns, table);

    let row = sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(pool.pool())
        .await?;

    Ok(row)
}
