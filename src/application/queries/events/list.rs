use super::SystemEventQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, SystemEventDto},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::event::SystemEventCursor,
};

#[derive(Debug, Default)]
pub struct ListSystemEventsQuery {
    pub event_type: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl SystemEventQueryService {
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: ListSystemEventsQuery,
    ) -> ApplicationResult<CursorPage<SystemEventDto>> {
        if !actor.has_capability("events", "read") {
            return Err(ApplicationError::forbidden("missing capability events:read"));
        }

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(SystemEventCursor::decode)
            .transpose()?;

        let (events, next) = self
            .event_repo
            .list(query.event_type.as_deref(), limit, cursor)
            .await?;
        let items = events.into_iter().map(SystemEventDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
