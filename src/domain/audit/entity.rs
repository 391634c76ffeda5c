// src/domain/audit/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// One mutating action, as recorded by the HTTP audit middleware or a
/// command service. `id`/`created_at` are absent until persisted.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: Option<i64>,
    pub user_id: Option<UserId>,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<i64>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
