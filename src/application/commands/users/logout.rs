use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revoke the session carried by the caller's token. Tokens without a
    /// session id simply expire.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &actor.session_id {
            self.session_revocation_store.revoke(session_id).await?;
        }
        Ok(())
    }
}
