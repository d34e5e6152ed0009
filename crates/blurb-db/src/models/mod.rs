//! Database models - rows as SQLx sees them

mod article;
mod user;

pub use article::{ArticleModel, BlurbModel};
pub use user::UserModel;
