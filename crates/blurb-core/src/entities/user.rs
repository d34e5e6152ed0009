//! User entity - an anonymous reader identified only by session

use chrono::{DateTime, Utc};

use crate::value_objects::{ArticleStatus, ReactionKind, Snowflake};

/// Anonymous reader and the articles they have reacted to.
///
/// `liked` and `disliked` keep insertion order and are not deduplicated.
/// An id may sit in both; [`User::status_of`] resolves that in favor of
/// `liked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub session_id: String,
    pub liked: Vec<Snowflake>,
    pub disliked: Vec<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Transient user for a session seen for the first time
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            liked: Vec::new(),
            disliked: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Liked is checked before disliked; the first match wins
    pub fn status_of(&self, article_id: Snowflake) -> ArticleStatus {
        if self.liked.contains(&article_id) {
            ArticleStatus::Liked
        } else if self.disliked.contains(&article_id) {
            ArticleStatus::Disliked
        } else {
            ArticleStatus::Neutral
        }
    }

    /// Append the article to the matching set
    pub fn record(&mut self, kind: ReactionKind, article_id: Snowflake) {
        match kind {
            ReactionKind::Like => self.liked.push(article_id),
            ReactionKind::Dislike => self.disliked.push(article_id),
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_neutral() {
        let user = User::new("sess-1");
        assert!(user.liked.is_empty());
        assert!(user.disliked.is_empty());
        assert_eq!(user.status_of(Snowflake::new(7)), ArticleStatus::Neutral);
    }

    #[test]
    fn test_record_appends_without_dedup() {
        let mut user = User::new("sess-1");
        let id = Snowflake::new(7);
        user.record(ReactionKind::Like, id);
        user.record(ReactionKind::Like, id);
        assert_eq!(user.liked, vec![id, id]);
        assert_eq!(user.status_of(id), ArticleStatus::Liked);
    }

    #[test]
    fn test_liked_wins_over_disliked() {
        let mut user = User::new("sess-1");
        let id = Snowflake::new(7);
        user.record(ReactionKind::Dislike, id);
        assert_eq!(user.status_of(id), ArticleStatus::Disliked);

        user.record(ReactionKind::Like, id);
        assert_eq!(user.status_of(id), ArticleStatus::Liked);
    }
}
