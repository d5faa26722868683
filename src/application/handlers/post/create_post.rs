//! CreatePostHandler - publish a new post, optionally with a PDF report.

use std::sync::Arc;

use crate::domain::post::{Post, PostDraft, PostError};
use crate::ports::{CategoryRegistry, PdfStorage, PostRepository};

/// An uploaded PDF accompanying the creation form.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Command to create a post from a validated draft.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub draft: PostDraft,
    pub pdf: Option<PdfUpload>,
}

/// Handler for post creation.
pub struct CreatePostHandler {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRegistry>,
    storage: Arc<dyn PdfStorage>,
}

impl CreatePostHandler {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRegistry>,
        storage: Arc<dyn PdfStorage>,
    ) -> Self {
        Self {
            posts,
            categories,
            storage,
        }
    }

    /// Upload the PDF (if any), insert the post, register a new custom
    /// category label as a best-effort side effect.
    ///
    /// # Errors
    ///
    /// - `Upload` if file storage rejects the upload; the insert is never
    ///   attempted, so no partial post is left behind
    /// - `Infrastructure` if the row insert fails
    ///
    /// A failure registering the custom category is logged and swallowed;
    /// it never rolls back the created post.
    pub async fn handle(&self, cmd: CreatePostCommand) -> Result<Post, PostError> {
        // 1. Upload first. An upload failure aborts before the insert.
        let pdf_url = match &cmd.pdf {
            Some(upload) => Some(
                self.storage
                    .store(&upload.filename, &upload.bytes)
                    .await
                    .map_err(|e| PostError::upload(e.to_string()))?,
            ),
            None => None,
        };

        // 2. Insert the row; the store assigns id and publish timestamp.
        let post = self.posts.insert(&cmd.draft, pdf_url).await?;

        // 3. Best-effort registration of a brand-new category label.
        if let Some(label) = cmd.draft.new_category_label() {
            if let Err(e) = self.categories.add(label).await {
                tracing::warn!(error = %e, label, "Failed to register custom category");
            }
        }

        Ok(post)
    }
}
