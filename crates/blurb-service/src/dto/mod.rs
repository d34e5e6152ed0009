//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs shaped like the JSON the front end expects
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ArticleRef, ArticlesQuery, NewArticleRequest, ReactionRequest, UploadedFile};
pub use responses::{
    ArticleResponse, ArticlesResponse, BlurbResponse, CreatedArticleResponse, HealthResponse,
    ResultResponse,
};
