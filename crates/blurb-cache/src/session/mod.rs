//! Session stores

mod memory_store;
mod redis_store;

pub use memory_store::MemorySessionStore;
pub use redis_store::RedisSessionStore;

/// Fresh opaque session id
pub(crate) fn new_session_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
