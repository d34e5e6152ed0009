//! Integration test utilities for the blurb server
//!
//! Spawns the full application on an ephemeral port, backed by in-memory
//! repositories and sessions and a scratch public directory.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
