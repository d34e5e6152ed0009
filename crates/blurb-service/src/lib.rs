//! # blurb-service
//!
//! Application layer containing the session resolver, article reader and
//! writer, reaction recorder, upload storage, and DTOs.

pub mod dto;
pub mod services;
pub mod storage;

pub use services::{
    ArticleService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
pub use storage::{extension_for, UploadStore};
