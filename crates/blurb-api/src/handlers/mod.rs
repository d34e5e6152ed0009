//! Route handlers

pub mod articles;
pub mod health;
pub mod pages;
pub mod reactions;
