use super::AuditQueryService;
use crate::{
    application::{
        dto::{AuditLogDto, AuthenticatedUser, CursorPage},
        error::ApplicationResult,
        queries::normalize_limit,
    },
    domain::audit::AuditLogCursor,
};

#[derive(Debug, Default)]
pub struct ListAuditLogsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: ListAuditLogsQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        self.ensure_can_read(actor)?;

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()?;

        let (logs, next) = self.audit_repo.list(limit, cursor).await?;
        let items = logs.into_iter().map(AuditLogDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
