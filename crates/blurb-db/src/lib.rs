//! # blurb-db
//!
//! Database layer implementing the `blurb-core` repository ports.
//!
//! ## Overview
//!
//! - Connection pool management and the embedded schema
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repositories
//! - In-memory repositories used when no database is configured
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blurb_db::{create_pool, run_migrations, PgArticleRepository, PoolConfig};
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new(url)).await?;
//!     run_migrations(&pool).await?;
//!     let articles = PgArticleRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryArticleRepository, MemoryUserRepository};
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgArticleRepository, PgUserRepository};
