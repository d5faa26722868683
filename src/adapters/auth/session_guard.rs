//! In-memory session guard.
//!
//! Holds the set of session tokens issued by successful logins. The guard is
//! an explicit auth-context object handed to the admin surface as state, not
//! ambient storage. Sessions are ephemeral: they live in process memory only
//! and all die together when the process exits. There is no logout.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::SessionToken;
use crate::ports::AdminSessions;

/// Process-local registry of authenticated admin sessions.
#[derive(Debug, Default)]
pub struct SessionGuard {
    tokens: RwLock<HashSet<SessionToken>>,
}

impl SessionGuard {
    /// Creates a guard with no authenticated sessions.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminSessions for SessionGuard {
    async fn issue(&self) -> SessionToken {
        let token = SessionToken::new();
        self.tokens.write().await.insert(token);
        token
    }

    async fn is_authenticated(&self, token: &SessionToken) -> bool {
        self.tokens.read().await.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_logged_out() {
        let guard = SessionGuard::new();
        assert!(!guard.is_authenticated(&SessionToken::new()).await);
    }

    #[tokio::test]
    async fn issued_token_is_authenticated() {
        let guard = SessionGuard::new();
        let token = guard.issue().await;
        assert!(guard.is_authenticated(&token).await);
    }

    #[tokio::test]
    async fn unknown_token_is_not_authenticated() {
        let guard = SessionGuard::new();
        guard.issue().await;
        assert!(!guard.is_authenticated(&SessionToken::new()).await);
    }

    #[tokio::test]
    async fn multiple_sessions_coexist() {
        let guard = SessionGuard::new();
        let first = guard.issue().await;
        let second = guard.issue().await;
        assert!(guard.is_authenticated(&first).await);
        assert!(guard.is_authenticated(&second).await);
    }
}
