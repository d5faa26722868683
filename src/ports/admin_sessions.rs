//! Admin session store port.

use async_trait::async_trait;

use crate::domain::auth::SessionToken;

/// The authenticated-session set behind the admin surface.
///
/// # Contract
///
/// Implementations hold sessions for the life of the process only; there is
/// no logout and nothing is persisted. A token is authenticated exactly
/// when this store issued it.
#[async_trait]
pub trait AdminSessions: Send + Sync {
    /// Record a successful login and return its token.
    async fn issue(&self) -> SessionToken;

    /// Whether a token belongs to an authenticated session.
    async fn is_authenticated(&self, token: &SessionToken) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sessions_is_object_safe() {
        fn _accepts_dyn(_sessions: &dyn AdminSessions) {}
    }
}
