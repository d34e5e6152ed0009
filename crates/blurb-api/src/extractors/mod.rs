//! Axum extractors for request handling

mod form;
mod json;
mod session;

pub use form::ArticleForm;
pub use json::JsonBody;
pub use session::CurrentSession;
