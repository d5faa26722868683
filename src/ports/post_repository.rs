//! Post repository port.
//!
//! Defines the contract for reading and writing blog posts against the
//! content store. Implementations handle the actual database operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::{Category, Post, PostDraft};

/// Repository port for blog posts.
///
/// Ordering contract: both list operations return posts by published date,
/// newest first. Posts sharing a published date have no secondary tie-break;
/// their relative order is whatever the store returns.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List every post, newest first. Used by the admin console.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on read failure
    async fn list_all(&self) -> Result<Vec<Post>, DomainError>;

    /// List posts in one category, newest first. Used by the public pages.
    ///
    /// Returns an empty vector when no posts match.
    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError>;

    /// Insert a new post and return the stored row.
    ///
    /// The store assigns the id and publish timestamp; `pdf_url` is the
    /// already-uploaded attachment URL, if any.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on insert failure; no partial row is left behind
    async fn insert(&self, draft: &PostDraft, pdf_url: Option<String>) -> Result<Post, DomainError>;

    /// Delete a post by id.
    ///
    /// Deleting an id that no longer exists is a no-op success; the store
    /// treats it the same way.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on network or permission failure
    async fn delete(&self, id: PostId) -> Result<(), DomainError>;
}
