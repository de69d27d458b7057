//! Image File Storage
//!
//! Uploaded event images are written under the configured upload
//! directory with a generated UUID filename (collisions are not a
//! concern) and served back under the public `/uploads` path.
//!
//! The file write and the subsequent entity insert are not atomic: a
//! failure between them can leave an orphaned file on disk. That is an
//! accepted, documented gap.

use std::path::PathBuf;
use uuid::Uuid;

use crate::application::config::EventsConfig;
use crate::error::{EventError, EventResult};

/// An uploaded image, as received from the multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original client filename (only the extension is kept)
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Filesystem-backed image store
#[derive(Debug, Clone)]
pub struct ImageStore {
    upload_dir: PathBuf,
    public_path: String,
}

impl ImageStore {
    pub fn new(config: &EventsConfig) -> Self {
        Self {
            upload_dir: config.upload_dir.clone(),
            public_path: config.public_path.clone(),
        }
    }

    /// Save an uploaded image and return its public URL
    pub async fn save(&self, upload: &ImageUpload) -> EventResult<String> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| EventError::Image(e.to_string()))?;

        let extension = Self::extension_of(upload.filename.as_deref());
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.upload_dir.join(&filename);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| EventError::Image(e.to_string()))?;

        tracing::info!(path = %path.display(), "Image saved");

        Ok(format!("{}/{}", self.public_path, filename))
    }

    /// Derive a safe file extension from the client filename
    ///
    /// Falls back to "jpg" when absent or suspicious.
    fn extension_of(filename: Option<&str>) -> String {
        let ext = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            ext
        } else {
            "jpg".to_string()
        }
    }
}
