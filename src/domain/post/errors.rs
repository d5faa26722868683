//! Post-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PostId};

/// Post-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    /// Post was not found.
    NotFound(PostId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Delete was requested without confirmation.
    ConfirmationRequired,
    /// PDF upload failed; nothing was inserted.
    Upload(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl PostError {
    pub fn not_found(id: PostId) -> Self {
        PostError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PostError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn confirmation_required() -> Self {
        PostError::ConfirmationRequired
    }

    pub fn upload(message: impl Into<String>) -> Self {
        PostError::Upload(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PostError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PostError::NotFound(_) => ErrorCode::PostNotFound,
            PostError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PostError::ConfirmationRequired => ErrorCode::ConfirmationRequired,
            PostError::Upload(_) => ErrorCode::UploadFailed,
            PostError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PostError::NotFound(id) => format!("Post not found: {}", id),
            PostError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PostError::ConfirmationRequired => {
                "Delete requires confirmation".to_string()
            }
            PostError::Upload(msg) => format!("PDF upload failed: {}", msg),
            PostError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for PostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PostError {}

impl From<DomainError> for PostError {
    fn from(err: DomainError) -> Self {
        PostError::Infrastructure(err.to_string())
    }
}
