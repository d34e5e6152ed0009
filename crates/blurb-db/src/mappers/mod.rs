//! Entity ↔ model conversions

mod article;
mod user;

pub use article::blurb_models;
