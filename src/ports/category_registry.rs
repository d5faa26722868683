//! Custom category registry port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Registry of category labels the admin has introduced ad hoc.
///
/// The registry has set semantics: adding a label that already exists is a
/// no-op, so duplicate entries never accumulate.
#[async_trait]
pub trait CategoryRegistry: Send + Sync {
    /// All registered labels.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on read failure
    async fn list(&self) -> Result<Vec<String>, DomainError>;

    /// Register a label. Idempotent.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on write failure
    async fn add(&self, name: &str) -> Result<(), DomainError>;
}
