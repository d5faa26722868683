//! GetListingHandler - one public listing page, fetched and partitioned.

use std::sync::Arc;

use crate::domain::post::{Category, CategoryListing, PostError};
use crate::ports::PostRepository;

/// Handler for the public listing pages.
///
/// Performs the page's single filtered fetch and assembles the tab
/// partition for it.
pub struct GetListingHandler {
    posts: Arc<dyn PostRepository>,
}

impl GetListingHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// # Errors
    ///
    /// - `Infrastructure` on read failure
    pub async fn handle(&self, category: Category) -> Result<CategoryListing, PostError> {
        let posts = self.posts.list_by_category(category).await?;
        Ok(CategoryListing::assemble(category, posts))
    }
}
