//! LoginHandler - the Session Guard's login operation.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::auth::{AuthError, SessionToken, ADMIN_USERNAME};
use crate::domain::post::Post;
use crate::ports::{AdminSessions, CategoryRegistry, CredentialReader, PostRepository};

/// Command to log in as the admin.
pub struct LoginCommand {
    pub password: SecretString,
}

/// Result of a successful login.
///
/// Carries the refreshed post list and custom-category list alongside the
/// token, so the console renders with fresh data immediately after the
/// transition to `LoggedIn`.
#[derive(Debug)]
pub struct LoginResult {
    pub token: SessionToken,
    pub posts: Vec<Post>,
    pub custom_categories: Vec<String>,
}

/// Handler for admin login.
pub struct LoginHandler {
    credentials: Arc<dyn CredentialReader>,
    sessions: Arc<dyn AdminSessions>,
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRegistry>,
}

impl LoginHandler {
    pub fn new(
        credentials: Arc<dyn CredentialReader>,
        sessions: Arc<dyn AdminSessions>,
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRegistry>,
    ) -> Self {
        Self {
            credentials,
            sessions,
            posts,
            categories,
        }
    }

    /// Verify the submitted password and open a session.
    ///
    /// # Errors
    ///
    /// - `CredentialLookup` if the credential row is missing or unreadable
    /// - `InvalidPassword` on mismatch
    ///
    /// Both surface to the caller as the same generic failure; only the
    /// diagnostic log distinguishes them.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        // 1. Fetch the single credential row for the fixed username.
        let credential = self
            .credentials
            .find_by_username(ADMIN_USERNAME)
            .await?
            .ok_or_else(|| {
                AuthError::credential_lookup(format!("No credential row for '{}'", ADMIN_USERNAME))
            })?;

        // 2. Verify against the stored hash, server side.
        if !credential.verify(cmd.password.expose_secret())? {
            return Err(AuthError::invalid_password());
        }

        // 3. Open the session.
        let token = self.sessions.issue().await;

        // 4. Refresh the console's data. Either read failing degrades to an
        //    empty list; the login itself has already succeeded.
        let posts = match self.posts.list_all().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, "Post refresh after login failed");
                Vec::new()
            }
        };
        let custom_categories = match self.categories.list().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "Category refresh after login failed");
                Vec::new()
            }
        };

        Ok(LoginResult {
            token,
            posts,
            custom_categories,
        })
    }
}
