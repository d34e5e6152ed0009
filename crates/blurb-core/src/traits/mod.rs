//! Ports implemented by the infrastructure crates

mod repositories;

pub use repositories::{ArticleRepository, RepoResult, SessionStore, UserRepository};
