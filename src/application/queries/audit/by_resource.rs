use super::AuditQueryService;
use crate::{
    application::{
        dto::{AuditLogDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::audit::AuditLogCursor,
};

#[derive(Debug)]
pub struct AuditByResourceQuery {
    pub resource_type: String,
    pub resource_id: i64,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    pub async fn by_resource(
        &self,
        actor: &AuthenticatedUser,
        query: AuditByResourceQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        self.ensure_can_read(actor)?;

        if query.resource_type.trim().is_empty() {
            return Err(ApplicationError::validation(
                "resource type cannot be empty",
            ));
        }

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()?;

        let (logs, next) = self
            .audit_repo
            .find_by_resource(&query.resource_type, query.resource_id, limit, cursor)
            .await?;
        let items = logs.into_iter().map(AuditLogDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
