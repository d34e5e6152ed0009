//! Upload storage on the local filesystem

mod upload_store;

pub use upload_store::{extension_for, UploadStore};
