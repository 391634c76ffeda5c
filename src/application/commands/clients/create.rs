use super::{ClientCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::client::{DocumentNumber, EntityKind, NewClient},
};

pub struct CreateClientCommand {
    pub entity_kind: EntityKind,
    pub document_number: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ClientCommandService {
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        command: CreateClientCommand,
    ) -> ApplicationResult<ClientDto> {
        ensure_capability(actor, "create")?;

        let document = DocumentNumber::new(command.document_number)?;

        if self
            .client_repo
            .find_by_document(&document)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("document number already exists"));
        }

        let new_client = NewClient::new(
            command.entity_kind,
            document,
            command.name,
            command.contact_name,
            command.email,
            command.phone,
            command.address,
            Some(actor.id),
            self.clock.now(),
        )?;

        let client = self.client_repo.insert(new_client).await?;
        Ok(client.into())
    }
}
