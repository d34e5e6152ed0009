//! Article entity - a published piece with pro/con blurbs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ReactionKind, Snowflake};

/// One argument for or against the article's subject, with its image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blurb {
    pub image_url: String,
    pub content: String,
}

impl Blurb {
    pub fn new(image_url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            content: content.into(),
        }
    }
}

/// Article aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Snowflake,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub pro_blurbs: Vec<Blurb>,
    pub con_blurbs: Vec<Blurb>,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Create a fresh article with zeroed counters
    pub fn new(
        id: Snowflake,
        title: String,
        content: String,
        image_url: String,
        pro_blurbs: Vec<Blurb>,
        con_blurbs: Vec<Blurb>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image_url,
            pro_blurbs,
            con_blurbs,
            likes: 0,
            dislikes: 0,
            created_at: Utc::now(),
        }
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => self.likes += 1,
            ReactionKind::Dislike => self.dislikes += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article::new(
            Snowflake::new(1),
            "Pineapple on pizza".to_string(),
            "A balanced look.".to_string(),
            "/uploads/f4240.png".to_string(),
            vec![Blurb::new("/uploads/f4241.png", "Sweet and salty")],
            vec![],
        )
    }

    #[test]
    fn test_new_article_counters_start_at_zero() {
        let article = sample();
        assert_eq!(article.likes, 0);
        assert_eq!(article.dislikes, 0);
    }

    #[test]
    fn test_increment_touches_one_counter() {
        let mut article = sample();
        article.increment(ReactionKind::Like);
        article.increment(ReactionKind::Like);
        article.increment(ReactionKind::Dislike);
        assert_eq!(article.likes, 2);
        assert_eq!(article.dislikes, 1);
    }
}
