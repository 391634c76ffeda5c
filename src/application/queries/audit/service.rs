use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::audit::AuditLogRepository;

pub struct AuditQueryService {
    pub(super) audit_repo: Arc<dyn AuditLogRepository>,
}

impl AuditQueryService {
    pub fn new(audit_repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { audit_repo }
    }

    pub(super) fn ensure_can_read(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if actor.has_capability("audit", "read") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("missing capability audit:read"))
        }
    }
}
