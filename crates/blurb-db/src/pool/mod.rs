//! Connection pool management

mod postgres;

pub use postgres::{create_pool, run_migrations, PgPool, PoolConfig};
