//! ListPostsHandler - the admin console's full post list.

use std::sync::Arc;

use crate::domain::post::{Post, PostError};
use crate::ports::PostRepository;

/// Handler for listing every post, newest first.
pub struct ListPostsHandler {
    posts: Arc<dyn PostRepository>,
}

impl ListPostsHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// # Errors
    ///
    /// - `Infrastructure` on read failure
    pub async fn handle(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.posts.list_all().await?)
    }
}
