//! PDF storage port - binary object storage for attached reports.
//!
//! The domain depends on this trait, while adapters (like LocalPdfStorage)
//! provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Port for storing uploaded PDF reports.
///
/// # Contract
///
/// Implementations must:
/// - Derive the object name from the current timestamp plus the original
///   file's extension, so repeated uploads never collide on name
/// - Accept only PDF input
/// - Return a public URL that dereferences to the stored bytes
#[async_trait]
pub trait PdfStorage: Send + Sync {
    /// Store the uploaded bytes and return the public URL.
    ///
    /// # Arguments
    ///
    /// * `original_name` - The client-side filename, used for its extension
    /// * `bytes` - The file content
    ///
    /// # Errors
    ///
    /// Returns `UploadError` if the input is not a PDF or the write fails.
    /// On error nothing is stored; callers must not insert a post row that
    /// references a failed upload.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError>;
}

/// Errors that can occur while storing an uploaded PDF.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// The uploaded file is not a PDF.
    #[error("Not a PDF file: {filename}")]
    NotAPdf { filename: String },

    /// The upload exceeds the size limit.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// IO error during the write.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl UploadError {
    /// Creates a not-a-PDF error.
    pub fn not_a_pdf(filename: impl Into<String>) -> Self {
        Self::NotAPdf {
            filename: filename.into(),
        }
    }

    /// Creates a file-too-large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_pdf_displays_filename() {
        let err = UploadError::not_a_pdf("report.docx");
        assert!(err.to_string().contains("report.docx"));
    }

    #[test]
    fn file_too_large_displays_sizes() {
        let err = UploadError::file_too_large(30_000_000, 20_000_000);
        assert!(err.to_string().contains("30000000"));
        assert!(err.to_string().contains("20000000"));
    }

    #[test]
    fn converts_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: UploadError = io_err.into();
        assert!(matches!(err, UploadError::Io { .. }));
    }

    #[test]
    fn pdf_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn PdfStorage) {}
    }
}
