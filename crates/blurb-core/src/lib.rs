//! # blurb-core
//!
//! Domain layer containing entities, value objects, and the ports the
//! infrastructure crates implement. This crate has zero dependencies on
//! infrastructure (database, web framework, session backend).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Article, Blurb, Session, User};
pub use error::DomainError;
pub use traits::{ArticleRepository, RepoResult, SessionStore, UserRepository};
pub use value_objects::{
    ArticleStatus, ReactionKind, Snowflake, SnowflakeGenerator, SnowflakeParseError, TimeWindow,
    UploadNamer, UPLOAD_BLOCK_SIZE,
};
