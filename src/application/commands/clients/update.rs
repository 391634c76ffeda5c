use super::{ClientCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::client::{ClientId, ClientUpdate},
};

pub struct UpdateClientCommand {
    pub client_id: i64,
    pub name: Option<String>,
    pub contact_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl ClientCommandService {
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateClientCommand,
    ) -> ApplicationResult<ClientDto> {
        ensure_capability(actor, "update")?;

        let client_id = ClientId::new(command.client_id)?;

        if let Some(name) = command.name.as_deref()
            && name.trim().is_empty()
        {
            return Err(ApplicationError::validation("client name cannot be empty"));
        }

        let update = ClientUpdate {
            name: command.name,
            contact_name: command.contact_name,
            email: command.email,
            phone: command.phone,
            address: command.address,
            is_active: command.is_active,
        };

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let client = self
            .client_repo
            .update(client_id, update, Some(actor.id))
            .await?;
        Ok(client.into())
    }
}
