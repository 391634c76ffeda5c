// src/application/ports/session_revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    /// Return true if the given session id has been revoked.
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke the given session id (e.g. on logout).
    async fn revoke(&self, session_id: &str) -> ApplicationResult<()>;

    /// Track a session for a user so it can be bulk-revoked later.
    async fn add_session_for_user(
        &self,
        user_id: i64,
        session_id: &str,
    ) -> ApplicationResult<()>;

    /// Revoke every known session of a user (account deactivation).
    async fn revoke_all_for_user(&self, user_id: i64) -> ApplicationResult<()>;
}
