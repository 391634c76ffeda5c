// src/domain/client/repository.rs
use crate::domain::client::{
    entity::{Client, ClientUpdate, NewClient},
    value_objects::{ClientId, ClientListCursor, DocumentNumber, EntityKind},
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn insert(&self, new_client: NewClient) -> DomainResult<Client>;

    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>>;

    async fn find_by_document(&self, document: &DocumentNumber) -> DomainResult<Option<Client>>;

    async fn update(
        &self,
        id: ClientId,
        update: ClientUpdate,
        updated_by: Option<UserId>,
    ) -> DomainResult<Client>;

    /// Newest-first keyset page; `search` matches name or document number,
    /// `kind` narrows to persons or companies, inactive rows are included
    /// only when `include_inactive` is set.
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ClientListCursor>,
        search: Option<&str>,
        kind: Option<EntityKind>,
        include_inactive: bool,
    ) -> DomainResult<(Vec<Client>, Option<ClientListCursor>)>;
}
