//! Local Filesystem Storage Adapter - Implementation of PdfStorage.
//!
//! Stores uploaded report PDFs in a flat directory. Object names are the
//! upload's epoch-millisecond timestamp plus the original extension, so
//! repeated uploads never collide. The directory is served back to readers
//! at the configured public base URL.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::foundation::Timestamp;
use crate::ports::{PdfStorage, UploadError};

/// Maximum upload size allowed (20 MB).
const MAX_FILE_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Local filesystem storage for uploaded PDFs.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{name}`
///
/// A crash mid-write leaves at most a `.tmp` file, never a half-written
/// object behind a live URL.
#[derive(Debug, Clone)]
pub struct LocalPdfStorage {
    /// Directory all PDFs are written into.
    pdf_dir: PathBuf,

    /// Public base URL the directory is served under (no trailing slash).
    public_base_url: String,
}

impl LocalPdfStorage {
    /// Creates a new local PDF storage.
    pub fn new(pdf_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            pdf_dir: pdf_dir.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Extracts a lowercase extension, requiring it to be `pdf`.
    fn pdf_extension(original_name: &str) -> Result<String, UploadError> {
        let ext = original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| UploadError::not_a_pdf(original_name))?;

        if ext == "pdf" {
            Ok(ext)
        } else {
            Err(UploadError::not_a_pdf(original_name))
        }
    }

    /// Object name for an upload arriving now.
    fn object_name(ext: &str) -> String {
        format!("{}.{}", Timestamp::now().epoch_millis(), ext)
    }
}

#[async_trait]
impl PdfStorage for LocalPdfStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let ext = Self::pdf_extension(original_name)?;

        let size = bytes.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(UploadError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        fs::create_dir_all(&self.pdf_dir).await.map_err(|e| {
            UploadError::io(format!(
                "Failed to create PDF directory {}: {}",
                self.pdf_dir.display(),
                e
            ))
        })?;

        let name = Self::object_name(&ext);
        let final_path = self.pdf_dir.join(&name);
        let temp_path = self.pdf_dir.join(format!("{}.tmp", name));

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &final_path).await?;

        Ok(format!("{}/{}", self.public_base_url, name))
    }
}
