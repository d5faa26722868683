//! DeletePostHandler - remove a post after explicit confirmation.

use std::sync::Arc;

use crate::domain::foundation::PostId;
use crate::domain::post::PostError;
use crate::ports::PostRepository;

/// Command to delete a post.
///
/// `confirmed` carries the caller's yes/no answer; deletion never proceeds
/// without it.
#[derive(Debug, Clone, Copy)]
pub struct DeletePostCommand {
    pub id: PostId,
    pub confirmed: bool,
}

/// Handler for post deletion.
pub struct DeletePostHandler {
    posts: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Delete the post by id.
    ///
    /// Deleting an id the store no longer has is a no-op success.
    ///
    /// # Errors
    ///
    /// - `ConfirmationRequired` if the command is unconfirmed
    /// - `Infrastructure` on store failure
    pub async fn handle(&self, cmd: DeletePostCommand) -> Result<(), PostError> {
        if !cmd.confirmed {
            return Err(PostError::confirmation_required());
        }

        self.posts.delete(cmd.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Timestamp};
    use crate::domain::post::{Category, Post, PostDraft};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockPostRepository {
        deleted: Mutex<Vec<PostId>>,
        fail: bool,
    }

    impl MockPostRepository {
        fn new() -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn deleted(&self) -> Vec<PostId> {
            self.deleted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
            Ok(Vec::new())
        }

        async fn list_by_category(&self, _category: Category) -> Result<Vec<Post>, DomainError> {
            Ok(Vec::new())
        }

        async fn insert(
            &self,
            draft: &PostDraft,
            pdf_url: Option<String>,
        ) -> Result<Post, DomainError> {
            Ok(Post::reconstitute(
                PostId::from_uuid(Uuid::new_v4()),
                draft.title.clone(),
                draft.excerpt.clone(),
                draft.content.clone(),
                draft.category,
                None,
                None,
                draft.author.clone(),
                Timestamp::now(),
                pdf_url,
            ))
        }

        async fn delete(&self, id: PostId) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::database("Simulated delete failure"));
            }
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn post_id() -> PostId {
        PostId::from_uuid(Uuid::new_v4())
    }

    #[tokio::test]
    async fn confirmed_delete_removes_the_post() {
        let repo = Arc::new(MockPostRepository::new());
        let handler = DeletePostHandler::new(repo.clone());
        let id = post_id();

        handler
            .handle(DeletePostCommand {
                id,
                confirmed: true,
            })
            .await
            .unwrap();

        assert_eq!(repo.deleted(), vec![id]);
    }

    #[tokio::test]
    async fn unconfirmed_delete_never_reaches_the_store() {
        let repo = Arc::new(MockPostRepository::new());
        let handler = DeletePostHandler::new(repo.clone());

        let result = handler
            .handle(DeletePostCommand {
                id: post_id(),
                confirmed: false,
            })
            .await;

        assert!(matches!(result, Err(PostError::ConfirmationRequired)));
        assert!(repo.deleted().is_empty());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_infrastructure_error() {
        let repo = Arc::new(MockPostRepository::failing());
        let handler = DeletePostHandler::new(repo);

        let result = handler
            .handle(DeletePostCommand {
                id: post_id(),
                confirmed: true,
            })
            .await;

        assert!(matches!(result, Err(PostError::Infrastructure(_))));
    }
}
