// User repository implementation

use crate::db::repositories::queries::{question_queries, reply_queries, user_queries};
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Question, Reply, User, UserName};
use tracing::instrument;

/// Repository for user-related database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        super::fetch_by_id(
            &self.pool,
            user_queries::TABLE,
            user_queries::SELECT_ALL_COLUMNS,
            id,
        )
        .await
    }

    /// Find a user by exact first and last name
    ///
    /// Returns the first matching row when several users share a name.
    #[instrument(skip(self))]
    pub async fn find_by_name(
        &self,
        fname: &str,
        lname: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fname, lname
            FROM users
            WHERE fname = $1 AND lname = $2
            "#,
        )
        .bind(fname)
        .bind(lname)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    /// Fetch only the name projection for a user id, not the full row
    #[instrument(skip(self))]
    pub async fn name(&self, id: i64) -> Result<Option<UserName>, DatabaseError> {
        let name = sqlx::query_as::<_, UserName>(
            r#"
            SELECT fname, lname
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(name)
    }

    /// Find all questions authored by a user
    #[instrument(skip(self))]
    pub async fn authored_questions(&self, user_id: i64) -> Result<Vec<Question>, DatabaseError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1",
            question_queries::SELECT_ALL_COLUMNS,
            question_queries::TABLE
        );

        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(user_id)
            .fetch_all(self.pool.pool())
            .await?;

        Ok(questions)
    }

    /// Find all replies authored by a user
    #[instrument(skip(self))]
    pub async fn authored_replies(&self, user_id: i64) -> Result<Vec<Reply>, DatabaseError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1",
            reply_queries::SELECT_ALL_COLUMNS,
            reply_queries::TABLE
        );

        let replies = sqlx::query_as::<_, Reply>(&query)
            .bind(user_id)
            .fetch_all(self.pool.pool())
            .await?;

        Ok(replies)
    }

    /// Compute a user's average karma: total likes across their authored
    /// questions divided by the number of distinct questions they authored.
    ///
    /// # Returns
    /// `Ok(None)` for a user with no authored questions: the ratio is
    /// undefined there, and SQLite's NULL from the zero division is
    /// surfaced instead of an arithmetic fault.
    #[instrument(skip(self))]
    pub async fn average_karma(&self, user_id: i64) -> Result<Option<f64>, DatabaseError> {
        let karma: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT CAST(COUNT(ql.question_id) AS REAL) / COUNT(DISTINCT q.id)
            FROM questions q
            LEFT OUTER JOIN questions_likes ql ON ql.question_id = q.id
            WHERE q.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool.pool())
        .await?;

        tracing::debug!(user_id = user_id, karma = ?karma, "Computed average karma");
        Ok(karma)
    }

    /// Save a user: update when an identity is assigned, insert otherwise
    ///
    /// On insert, the store-assigned rowid is captured back onto the entity
    /// so subsequent saves update the same row.
    ///
    /// # Errors
    /// Returns `DatabaseError::NotFound` when an update matches no row.
    #[instrument(skip(self, user))]
    pub async fn save(&self, user: &mut User) -> Result<(), DatabaseError> {
        match user.id {
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE users
                    SET fname = $2,
                        lname = $3
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&user.fname)
                .bind(&user.lname)
                .execute(self.pool.pool())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(DatabaseError::NotFound(format!("User not found: {}", id)));
                }

                tracing::info!(user_id = id, "User updated");
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO users (fname, lname)
                    VALUES ($1, $2)
                    "#,
                )
                .bind(&user.fname)
                .bind(&user.lname)
                .execute(self.pool.pool())
                .await?;

                let id = result.last_insert_rowid();
                user.id = Some(id);

                tracing::info!(user_id = id, "User created");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::test_fixtures::{setup_board, setup_store};

    #[tokio::test]
    async fn test_find_by_id_returns_matching_user() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let user = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.fname, "Ada");
        assert_eq!(user.lname, "Lovelace");
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_none() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let user = repo.find_by_name("Alan", "Turing").await.unwrap().unwrap();
        assert_eq!(user.id, Some(2));

        assert!(repo
            .find_by_name("Alan", "Lovelace")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_name_returns_projection_only() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let name = repo.name(3).await.unwrap().unwrap();
        assert_eq!(name.fname, "Grace");
        assert_eq!(name.lname, "Hopper");

        assert!(repo.name(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authored_questions() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let questions = repo.authored_questions(1).await.unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.user_id == 1));

        assert!(repo.authored_questions(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authored_replies() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let replies = repo.authored_replies(1).await.unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].id, 2);
    }

    #[tokio::test]
    async fn test_average_karma() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        // Ada: questions 1 and 2 carry 2 + 1 likes
        assert_eq!(repo.average_karma(1).await.unwrap(), Some(1.5));
        // Alan: one question, one like
        assert_eq!(repo.average_karma(2).await.unwrap(), Some(1.0));
        // Grace: one question, zero likes
        assert_eq!(repo.average_karma(3).await.unwrap(), Some(0.0));
    }

    #[tokio::test]
    async fn test_average_karma_without_questions_is_undefined() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        // Edsger never asked anything; no arithmetic fault, no value
        assert_eq!(repo.average_karma(4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_insert_assigns_identity() {
        let (_dir, pool) = setup_store().await;
        let repo = UserRepository::new(pool);

        let mut user = User::new("Barbara", "Liskov");
        repo.save(&mut user).await.unwrap();

        let id = user.id.expect("identity assigned on first save");
        let fetched = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.fname, "Barbara");
        assert_eq!(fetched.lname, "Liskov");
    }

    #[tokio::test]
    async fn test_save_insert_uses_fresh_identity() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let mut user = User::new("Barbara", "Liskov");
        repo.save(&mut user).await.unwrap();

        // The seeded board already holds ids 1-4
        assert!(user.id.unwrap() > 4);
    }

    #[tokio::test]
    async fn test_save_update_is_idempotent() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let mut user = repo.find_by_id(2).await.unwrap().unwrap();
        user.lname = "Turing-Welchman".to_string();

        repo.save(&mut user).await.unwrap();
        let after_first = repo.find_by_id(2).await.unwrap().unwrap();

        repo.save(&mut user).await.unwrap();
        let after_second = repo.find_by_id(2).await.unwrap().unwrap();

        assert_eq!(after_first, after_second);
        assert_eq!(after_second.lname, "Turing-Welchman");
    }

    #[tokio::test]
    async fn test_save_update_unknown_id_is_not_found() {
        let (_dir, pool) = setup_board().await;
        let repo = UserRepository::new(pool);

        let mut user = User {
            id: Some(999),
            fname: "Nob".to_string(),
            lname: "Ody".to_string(),
        };

        let result = repo.save(&mut user).await;
        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    }
}
