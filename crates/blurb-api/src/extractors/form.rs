//! Article upload extractor
//!
//! Collects the author's multipart form into a `NewArticleRequest`. Field
//! names are accepted with or without a trailing `[]`, so both
//! `proBlurbs[]` and `proBlurbs` work.

use axum::{
    async_trait,
    extract::{multipart::Field, FromRequest, Multipart, Request},
};
use blurb_service::dto::{NewArticleRequest, UploadedFile};
use tracing::debug;

use crate::response::ApiError;

const OCTET_STREAM: &str = "application/octet-stream";

/// Multipart article upload
#[derive(Debug)]
pub struct ArticleForm(pub NewArticleRequest);

#[async_trait]
impl<S> FromRequest<S> for ArticleForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut form = NewArticleRequest::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?
        {
            let Some(name) = field.name().map(|n| n.trim_end_matches("[]").to_string()) else {
                continue;
            };

            match name.as_str() {
                "password" => form.password = text(field).await?,
                "title" => form.title = text(field).await?,
                "content" => form.content = text(field).await?,
                "tags" => form.tags.push(text(field).await?),
                "proBlurbs" => form.pro_blurbs.push(text(field).await?),
                "conBlurbs" => form.con_blurbs.push(text(field).await?),
                "coverImg" => {
                    if let Some(file) = file(field).await? {
                        form.cover = Some(file);
                    }
                }
                "proImgs" => form.pro_images.extend(file(field).await?),
                "conImgs" => form.con_images.extend(file(field).await?),
                other => debug!(field = other, "Skipping unknown form field"),
            }
        }

        Ok(ArticleForm(form))
    }
}

async fn text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))
}

/// Browsers send an empty part for a file input left blank
async fn file(field: Field<'_>) -> Result<Option<UploadedFile>, ApiError> {
    let content_type = field.content_type().unwrap_or(OCTET_STREAM).to_string();
    let file_name = field.file_name().filter(|n| !n.is_empty()).map(str::to_string);
    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))?;

    if data.is_empty() && file_name.is_none() {
        return Ok(None);
    }

    let upload = UploadedFile::new(content_type, data.to_vec());
    Ok(Some(match file_name {
        Some(name) => upload.with_file_name(name),
        None => upload,
    }))
}
