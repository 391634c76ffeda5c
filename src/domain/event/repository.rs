// src/domain/event/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::event::entity::{SystemEvent, SystemEventCursor};
use async_trait::async_trait;

#[async_trait]
pub trait SystemEventRepository: Send + Sync {
    async fn insert(&self, event: SystemEvent) -> DomainResult<()>;

    async fn list(
        &self,
        event_type: Option<&str>,
        limit: u32,
        cursor: Option<SystemEventCursor>,
    ) -> DomainResult<(Vec<SystemEvent>, Option<SystemEventCursor>)>;
}
