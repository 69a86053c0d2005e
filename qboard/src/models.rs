use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Board Entities
// ============================================================================

/// User represents one row of the `users` table.
///
/// `id` is `None` only for a user that has never been saved; the store
/// assigns the identity on first save and it is captured back onto the
/// entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

impl User {
    /// Create an unsaved user with no identity assigned yet
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }
}

/// Name-only projection of a user row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserName {
    pub fname: String,
    pub lname: String,
}

/// Question represents one row of the `questions` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// Reply represents one row of the `replies` table.
///
/// `parent_reply_id` is `None` for top-level replies; traversals must skip
/// the parent query entirely in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reply {
    pub id: i64,
    pub question_id: i64,
    pub body: String,
    pub user_id: i64,
    pub parent_reply_id: Option<i64>,
}

// ============================================================================
// Join Entities
// ============================================================================

/// One follow record: composite identity, no independent id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuestionFollow {
    pub user_id: i64,
    pub question_id: i64,
}

/// One like record: composite identity, no independent id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuestionLike {
    pub user_id: i64,
    pub question_id: i64,
}
