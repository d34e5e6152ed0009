//! Reaction kinds and the per-user article status derived from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// A like or dislike recorded against a (user, article) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the requesting user has reacted to an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Liked,
    Disliked,
    #[default]
    Neutral,
}

impl From<ReactionKind> for ArticleStatus {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => Self::Liked,
            ReactionKind::Dislike => Self::Disliked,
        }
    }
}
