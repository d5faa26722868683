//! PostgreSQL implementation of CredentialReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::auth::AdminCredential;
use crate::domain::foundation::DomainError;
use crate::ports::CredentialReader;

/// PostgreSQL implementation of CredentialReader over `admin_users`.
#[derive(Clone)]
pub struct PostgresCredentialReader {
    pool: PgPool,
}

impl PostgresCredentialReader {
    /// Creates a new PostgresCredentialReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialReader for PostgresCredentialReader {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredential>, DomainError> {
        let row = sqlx::query(
            "SELECT username, password_hash FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch admin credential: {}", e)))?;

        match row {
            Some(row) => {
                let read = |e: sqlx::Error| {
                    DomainError::database(format!("Failed to read credential row: {}", e))
                };
                Ok(Some(AdminCredential::reconstitute(
                    row.try_get("username").map_err(read)?,
                    row.try_get("password_hash").map_err(read)?,
                )))
            }
            None => Ok(None),
        }
    }
}
