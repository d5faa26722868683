//! PostgreSQL implementation of PostRepository.
//!
//! Persists blog posts to the `blog_posts` table. Ids and publish
//! timestamps are assigned by the database at insert.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, PostId, Timestamp};
use crate::domain::post::{Category, Post, PostDraft};
use crate::ports::PostRepository;

/// PostgreSQL implementation of PostRepository.
#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new PostgresPostRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, excerpt, content, category, subcategory, industry, \
                            author, published_date, pdf_url";

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM blog_posts ORDER BY published_date DESC",
            POST_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch posts: {}", e)))?;

        rows.into_iter().map(row_to_post).collect()
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM blog_posts WHERE category = $1 ORDER BY published_date DESC",
            POST_COLUMNS
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!(
                "Failed to fetch {} posts: {}",
                category, e
            ))
        })?;

        rows.into_iter().map(row_to_post).collect()
    }

    async fn insert(
        &self,
        draft: &PostDraft,
        pdf_url: Option<String>,
    ) -> Result<Post, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO blog_posts (
                title, excerpt, content, category, subcategory, industry, author, pdf_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(&draft.title)
        .bind(&draft.excerpt)
        .bind(&draft.content)
        .bind(draft.category.as_str())
        .bind(draft.effective_subcategory())
        .bind(draft.industry.as_deref())
        .bind(&draft.author)
        .bind(pdf_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert post: {}", e)))?;

        row_to_post(row)
    }

    async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        // Zero rows affected means the id was already gone; no-op success.
        sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete post {}: {}", id, e)))?;

        Ok(())
    }
}

fn row_to_post(row: PgRow) -> Result<Post, DomainError> {
    let category: String = row
        .try_get("category")
        .map_err(|e| DomainError::database(format!("Failed to read post row: {}", e)))?;
    let category: Category = category
        .parse()
        .map_err(|e| DomainError::database(format!("Corrupt category value: {}", e)))?;

    let read = |e: sqlx::Error| DomainError::database(format!("Failed to read post row: {}", e));

    Ok(Post::reconstitute(
        PostId::from_uuid(row.try_get("id").map_err(read)?),
        row.try_get("title").map_err(read)?,
        row.try_get("excerpt").map_err(read)?,
        row.try_get("content").map_err(read)?,
        category,
        row.try_get("subcategory").map_err(read)?,
        row.try_get("industry").map_err(read)?,
        row.try_get("author").map_err(read)?,
        Timestamp::from_datetime(row.try_get("published_date").map_err(read)?),
        row.try_get("pdf_url").map_err(read)?,
    ))
}
