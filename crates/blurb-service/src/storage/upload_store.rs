//! Upload store - names and writes uploaded images
//!
//! Names come from an [`UploadNamer`] seeded by scanning the upload
//! directory once at startup, so a restart never reuses a name.

use std::io;
use std::path::{Path, PathBuf};

use blurb_core::error::DomainError;
use blurb_core::UploadNamer;
use futures::future::try_join_all;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use crate::dto::UploadedFile;

/// Owns the upload directory and its namer
#[derive(Debug)]
pub struct UploadStore {
    dir: PathBuf,
    url_prefix: String,
    namer: UploadNamer,
}

impl UploadStore {
    /// Open (creating if needed) the upload directory and seed the namer
    /// from the names already in it
    pub async fn open(dir: impl AsRef<Path>, url_prefix: impl Into<String>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        let namer = UploadNamer::seed_from_names(names.iter().map(String::as_str));
        info!(
            dir = %dir.display(),
            existing = names.len(),
            next_block = namer.counter(),
            "Upload store ready"
        );

        Ok(Self {
            dir,
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
            namer,
        })
    }

    /// Public URL for a stored file name
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.url_prefix, name)
    }

    /// Reserve the next file name for an upload of this content type
    pub fn reserve_name(&self, content_type: &str) -> Result<String, DomainError> {
        self.namer.next_name(&extension_for(content_type))
    }

    /// Write every file and return their public URLs, in input order.
    ///
    /// Names are reserved one after another, then all writes run
    /// concurrently. Any failed write fails the whole batch, and a file that
    /// already exists is never overwritten.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn save_all(&self, files: &[&UploadedFile]) -> Result<Vec<String>, DomainError> {
        let names: Vec<String> = files
            .iter()
            .map(|file| self.reserve_name(&file.content_type))
            .collect::<Result<_, _>>()?;

        try_join_all(
            files
                .iter()
                .zip(&names)
                .map(|(file, name)| write_new(self.dir.join(name), &file.data)),
        )
        .await?;

        debug!(names = ?names, "Uploads written");
        Ok(names.iter().map(|name| self.url_for(name)).collect())
    }
}

/// Create `path` and write `data` into it, failing if the file exists
async fn write_new(path: PathBuf, data: &[u8]) -> Result<(), DomainError> {
    let storage_error =
        |e: io::Error| DomainError::StorageError(format!("writing {}: {e}", path.display()));

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
        .map_err(storage_error)?;
    file.write_all(data).await.map_err(storage_error)?;
    file.flush().await.map_err(storage_error)
}

/// File extension for an upload's MIME type
pub fn extension_for(content_type: &str) -> String {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "image/jpeg" => "jpeg".to_string(),
        "image/png" => "png".to_string(),
        "image/gif" => "gif".to_string(),
        "image/webp" => "webp".to_string(),
        "image/svg+xml" => "svg".to_string(),
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first())
            .map_or_else(|| "bin".to_string(), |ext| (*ext).to_string()),
    }
}
