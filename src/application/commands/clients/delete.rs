use super::{ClientCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::client::{ClientId, ClientUpdate},
};

pub struct DeleteClientCommand {
    pub client_id: i64,
}

impl ClientCommandService {
    /// Soft-delete: the record stays for the audit trail and kardex
    /// references, it just drops out of default listings.
    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteClientCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "delete")?;

        let client_id = ClientId::new(command.client_id)?;
        let client = self
            .client_repo
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("client not found"))?;

        if !client.is_active {
            return Ok(());
        }

        let update = ClientUpdate {
            is_active: Some(false),
            ..ClientUpdate::default()
        };
        self.client_repo
            .update(client_id, update, Some(actor.id))
            .await?;
        Ok(())
    }
}
