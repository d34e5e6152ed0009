//! PostgreSQL repository implementations

mod article;
mod error;
mod user;

pub use article::PgArticleRepository;
pub use user::PgUserRepository;
