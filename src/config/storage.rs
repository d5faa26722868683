//! PDF storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// PDF storage configuration
///
/// Uploaded report PDFs are written under `pdf_dir` and served back at
/// `public_base_url`, so the URL stored on a post stays valid for readers.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded PDFs are written
    #[serde(default = "default_pdf_dir")]
    pub pdf_dir: String,

    /// Public base URL under which the PDF directory is served
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl StorageConfig {
    /// Get the PDF directory as a path
    pub fn pdf_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.pdf_dir)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_dir.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_PDF_DIR"));
        }
        if self.public_base_url.is_empty() || self.public_base_url.ends_with('/') {
            return Err(ValidationError::InvalidPublicBaseUrl);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pdf_dir: default_pdf_dir(),
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_pdf_dir() -> String {
    "data/pdfs".to_string()
}

fn default_public_base_url() -> String {
    "/pdfs".to_string()
}
