//! Admin credential value object.

use crate::domain::auth::AuthError;

/// The fixed username the single admin credential row is keyed by.
pub const ADMIN_USERNAME: &str = "admin";

/// The stored admin credential: a username and a bcrypt password hash.
///
/// Read-only from the application's perspective; nothing in this crate
/// writes the credential row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    username: String,
    password_hash: String,
}

impl AdminCredential {
    /// Reconstitute a credential from persistence.
    pub fn reconstitute(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Verify a submitted password against the stored bcrypt hash.
    ///
    /// Returns `Ok(true)` on match, `Ok(false)` on mismatch. A malformed
    /// stored hash is an infrastructure failure, not a mismatch.
    pub fn verify(&self, password: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, &self.password_hash)
            .map_err(|e| AuthError::infrastructure(format!("Password verification failed: {}", e)))
    }
}
