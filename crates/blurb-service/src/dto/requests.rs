//! Request DTOs for API endpoints

use std::borrow::Cow;
use std::fmt;

use blurb_core::error::DomainError;
use blurb_core::{Snowflake, TimeWindow};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Reaction Requests
// ============================================================================

/// `{ "_id": "..." }`
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRef {
    #[serde(rename = "_id")]
    pub id: Snowflake,
}

/// Body of `POST /api/like` and `POST /api/dislike`
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionRequest {
    pub article: ArticleRef,
}

// ============================================================================
// Article Queries
// ============================================================================

/// Optional creation-time bounds for the article list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlesQuery {
    pub starting: Option<String>,
    pub until: Option<String>,
}

impl ArticlesQuery {
    /// Resolve the bounds against `now`; blank values count as absent
    pub fn window(&self, now: DateTime<Utc>) -> Result<TimeWindow, DomainError> {
        let parse = |raw: &Option<String>| {
            raw.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(TimeWindow::parse_bound)
                .transpose()
        };
        Ok(TimeWindow::from_bounds(
            parse(&self.starting)?,
            parse(&self.until)?,
            now,
        ))
    }
}

// ============================================================================
// Article Upload
// ============================================================================

/// One file part of a multipart upload
#[derive(Clone)]
pub struct UploadedFile {
    pub content_type: String,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            file_name: None,
            data,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Author upload assembled from the multipart form
#[derive(Clone, Default, Validate)]
#[validate(schema(function = "validate_uploads"))]
pub struct NewArticleRequest {
    pub password: String,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    pub content: String,

    /// Accepted for form compatibility; not stored
    pub tags: Vec<String>,

    pub cover: Option<UploadedFile>,
    pub pro_images: Vec<UploadedFile>,
    pub con_images: Vec<UploadedFile>,
    pub pro_blurbs: Vec<String>,
    pub con_blurbs: Vec<String>,
}

impl fmt::Debug for NewArticleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewArticleRequest")
            .field("title", &self.title)
            .field("tags", &self.tags)
            .field("cover", &self.cover)
            .field("pro_images", &self.pro_images.len())
            .field("con_images", &self.con_images.len())
            .finish_non_exhaustive()
    }
}

fn upload_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_uploads(request: &NewArticleRequest) -> Result<(), ValidationError> {
    let Some(cover) = &request.cover else {
        return Err(upload_error("cover_missing", "A cover image is required"));
    };
    if request.pro_blurbs.len() != request.pro_images.len() {
        return Err(upload_error(
            "pro_count",
            "Each pro blurb needs exactly one image",
        ));
    }
    if request.con_blurbs.len() != request.con_images.len() {
        return Err(upload_error(
            "con_count",
            "Each con blurb needs exactly one image",
        ));
    }
    let all_images = std::iter::once(cover)
        .chain(&request.pro_images)
        .chain(&request.con_images)
        .all(UploadedFile::is_image);
    if !all_images {
        return Err(upload_error("not_an_image", "Uploads must be images"));
    }
    Ok(())
}
