// SQL fragments shared by the repositories
// Centralizes table names and SELECT column lists so entity shape changes
// land in one place

/// SQL fragments for the `users` table
pub mod user_queries {
    pub const TABLE: &str = "users";
    pub const SELECT_ALL_COLUMNS: &str = "id, fname, lname";
}

/// SQL fragments for the `questions` table
pub mod question_queries {
    pub const TABLE: &str = "questions";
    pub const SELECT_ALL_COLUMNS: &str = "id, title, body, user_id";
}

/// SQL fragments for the `replies` table
pub mod reply_queries {
    pub const TABLE: &str = "replies";
    pub const SELECT_ALL_COLUMNS: &str = "id, question_id, body, user_id, parent_reply_id";
}

/// SQL fragments for the `questions_follows` table
pub mod question_follow_queries {
    pub const TABLE: &str = "questions_follows";
    pub const SELECT_ALL_COLUMNS: &str = "user_id, question_id";
}

/// SQL fragments for the `questions_likes` table
pub mod question_like_queries {
    pub const TABLE: &str = "questions_likes";
    pub const SELECT_ALL_COLUMNS: &str = "user_id, question_id";
}
