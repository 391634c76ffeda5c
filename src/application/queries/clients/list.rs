use super::ClientQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto, CursorPage},
        error::ApplicationResult,
        queries::normalize_limit,
    },
    domain::client::{ClientListCursor, EntityKind},
};

#[derive(Debug, Default)]
pub struct ListClientsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub search: Option<String>,
    pub kind: Option<EntityKind>,
    pub include_inactive: bool,
}

impl ClientQueryService {
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: ListClientsQuery,
    ) -> ApplicationResult<CursorPage<ClientDto>> {
        self.ensure_can_read(actor)?;

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(ClientListCursor::decode)
            .transpose()?;

        let (clients, next) = self
            .client_repo
            .list_page(
                limit,
                cursor,
                query.search.as_deref(),
                query.kind,
                query.include_inactive,
            )
            .await?;

        let items = clients.into_iter().map(ClientDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
