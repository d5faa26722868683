//! PostgreSQL implementation of CategoryRegistry.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::DomainError;
use crate::ports::CategoryRegistry;

/// PostgreSQL implementation of CategoryRegistry over `custom_categories`.
///
/// Set semantics come from the primary key on `name` plus
/// `ON CONFLICT DO NOTHING`: re-adding a known label is a no-op.
#[derive(Clone)]
pub struct PostgresCategoryRegistry {
    pool: PgPool,
}

impl PostgresCategoryRegistry {
    /// Creates a new PostgresCategoryRegistry.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRegistry for PostgresCategoryRegistry {
    async fn list(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query("SELECT name FROM custom_categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch custom categories: {}", e))
            })?;

        rows.into_iter()
            .map(|row| {
                row.try_get("name").map_err(|e| {
                    DomainError::database(format!("Failed to read category row: {}", e))
                })
            })
            .collect()
    }

    async fn add(&self, name: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO custom_categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to add custom category '{}': {}", name, e))
            })?;

        Ok(())
    }
}
