//! Admin credential reader port.

use async_trait::async_trait;

use crate::domain::auth::AdminCredential;
use crate::domain::foundation::DomainError;

/// Read-only access to the admin credential row.
///
/// The credential is provisioned out-of-band; this port never writes it.
#[async_trait]
pub trait CredentialReader: Send + Sync {
    /// Fetch the credential row for a username.
    ///
    /// Returns `None` when no row exists for that username.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on read failure
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredential>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CredentialReader) {}
    }
}
