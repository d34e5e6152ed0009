//! In-process repositories
//!
//! Used when no database URL is configured, and by the service and API
//! tests. State lives only as long as the process.

mod article;
mod user;

pub use article::MemoryArticleRepository;
pub use user::MemoryUserRepository;
