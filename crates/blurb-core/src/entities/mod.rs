//! Domain entities - core business objects

mod article;
mod session;
mod user;

pub use article::{Article, Blurb};
pub use session::Session;
pub use user::User;
