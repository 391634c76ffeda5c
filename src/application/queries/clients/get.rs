use super::ClientQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::client::ClientId,
};

impl ClientQueryService {
    pub async fn get(
        &self,
        actor: &AuthenticatedUser,
        client_id: i64,
    ) -> ApplicationResult<ClientDto> {
        self.ensure_can_read(actor)?;

        let id = ClientId::new(client_id)?;
        let client = self
            .client_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("client not found"))?;
        Ok(client.into())
    }
}
