//! Test fixtures
//!
//! Upload forms and request bodies for integration tests.

use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

use crate::helpers::AUTHOR_PASSWORD;

/// Smallest possible PNG signature; the server never decodes images
pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn image_part(name: &str, mime: &str, bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap_or_else(|e| panic!("bad mime {mime}: {e}"))
}

/// Article upload builder
///
/// `bracketed` chooses between `proImgs[]` style and bare field names.
pub struct UploadForm {
    pub password: String,
    pub title: String,
    pub pro: Vec<(&'static str, Vec<u8>)>,
    pub con: Vec<(&'static str, Vec<u8>)>,
    pub cover_mime: &'static str,
    pub bracketed: bool,
}

impl UploadForm {
    pub fn valid(title: &str) -> Self {
        Self {
            password: AUTHOR_PASSWORD.to_string(),
            title: title.to_string(),
            pro: vec![("Cheaper", b"pro-0".to_vec()), ("Faster", b"pro-1".to_vec())],
            con: vec![("Louder", b"con-0".to_vec())],
            cover_mime: "image/png",
            bracketed: true,
        }
    }

    #[must_use]
    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    #[must_use]
    pub fn bare_names(mut self) -> Self {
        self.bracketed = false;
        self
    }

    #[must_use]
    pub fn cover_mime(mut self, mime: &'static str) -> Self {
        self.cover_mime = mime;
        self
    }

    pub fn build(self) -> Form {
        let list = |name: &str| {
            if self.bracketed {
                format!("{name}[]")
            } else {
                name.to_string()
            }
        };

        let mut form = Form::new()
            .text("password", self.password.clone())
            .text("title", self.title.clone())
            .text("content", "Integration body")
            .text(list("tags"), "ignored")
            .part("coverImg", image_part("cover.png", self.cover_mime, PNG));

        for (i, (text, bytes)) in self.pro.iter().enumerate() {
            form = form
                .text(list("proBlurbs"), *text)
                .part(list("proImgs"), image_part(&format!("pro{i}.png"), "image/png", bytes));
        }
        for (i, (text, bytes)) in self.con.iter().enumerate() {
            form = form
                .text(list("conBlurbs"), *text)
                .part(list("conImgs"), image_part(&format!("con{i}.gif"), "image/gif", bytes));
        }
        form
    }
}

/// `{ "article": { "_id": id } }`
pub fn reaction_body(id: &str) -> Value {
    json!({ "article": { "_id": id } })
}
