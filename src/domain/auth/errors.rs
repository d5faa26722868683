//! Auth-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Auth-specific errors.
///
/// The public-facing message for both lookup failure and password mismatch
/// is the same generic "Authentication failed" so responses never reveal
/// whether the username exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The credential row is missing or could not be fetched.
    CredentialLookup(String),
    /// The submitted password did not match the stored hash.
    InvalidPassword,
    /// A protected endpoint was called without a valid session token.
    Unauthorized,
    /// Infrastructure error.
    Infrastructure(String),
}

impl AuthError {
    pub fn credential_lookup(message: impl Into<String>) -> Self {
        AuthError::CredentialLookup(message.into())
    }

    pub fn invalid_password() -> Self {
        AuthError::InvalidPassword
    }

    pub fn unauthorized() -> Self {
        AuthError::Unauthorized
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::CredentialLookup(_) => ErrorCode::CredentialNotFound,
            AuthError::InvalidPassword => ErrorCode::InvalidPassword,
            AuthError::Unauthorized => ErrorCode::Unauthorized,
            AuthError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Message safe to surface to the caller.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::CredentialLookup(_)
            | AuthError::InvalidPassword
            | AuthError::Infrastructure(_) => "Authentication failed",
            AuthError::Unauthorized => "Authentication required",
        }
    }

    /// Full message for the diagnostic channel.
    pub fn message(&self) -> String {
        match self {
            AuthError::CredentialLookup(msg) => format!("Credential lookup failed: {}", msg),
            AuthError::InvalidPassword => "Invalid password".to_string(),
            AuthError::Unauthorized => "Missing or invalid session token".to_string(),
            AuthError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        AuthError::CredentialLookup(err.to_string())
    }
}
