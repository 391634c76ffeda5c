use super::AuditQueryService;
use crate::{
    application::{
        dto::{AuditLogDto, AuthenticatedUser, CursorPage},
        error::ApplicationResult,
        queries::normalize_limit,
    },
    domain::audit::AuditLogCursor,
};

#[derive(Debug)]
pub struct AuditByUserQuery {
    pub user_id: i64,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    pub async fn by_user(
        &self,
        actor: &AuthenticatedUser,
        query: AuditByUserQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        self.ensure_can_read(actor)?;

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()?;

        let (logs, next) = self
            .audit_repo
            .find_by_user(query.user_id, limit, cursor)
            .await?;
        let items = logs.into_iter().map(AuditLogDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
