//! Business logic services

pub mod article;
pub mod context;
pub mod error;
pub mod reaction;
pub mod user;

pub use article::ArticleService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
pub use user::UserService;
