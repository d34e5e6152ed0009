//! # blurb-cache
//!
//! Session storage behind the `SessionStore` port.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Redis sessions**: `session:{id}` keys with a sliding TTL
//! - **Memory sessions**: a dashmap-backed store for single-process runs
//!
//! ## Example
//!
//! ```ignore
//! use blurb_cache::{RedisPool, RedisPoolConfig, RedisSessionStore};
//! use blurb_core::SessionStore;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = RedisSessionStore::new(pool, 2_592_000);
//!
//! let session = sessions.create().await?;
//! assert!(sessions.get(&session.id).await?.is_some());
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session stores
pub use session::{MemorySessionStore, RedisSessionStore};
