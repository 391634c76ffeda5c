// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::{AuditLog, AuditLogCursor, AuditLogRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const AUDIT_COLUMNS: &str =
    "id, user_id, action, resource_type, resource_id, details, ip_address, user_agent, created_at";

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    user_id: Option<i64>,
    action: String,
    resource_type: String,
    resource_id: Option<i64>,
    details: Option<serde_json::Value>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: Some(row.id),
            user_id: row.user_id.map(UserId::new).transpose()?,
            action: row.action,
            resource_type: row.resource_type,
            resource_id: row.resource_id,
            details: row.details,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            created_at: Some(row.created_at),
        })
    }
}

async fn fetch_page(
    pool: &PgPool,
    mut builder: QueryBuilder<'_, Postgres>,
    limit: u32,
    cursor: Option<AuditLogCursor>,
) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
    if let Some(cursor) = cursor.as_ref() {
        builder.push(" AND (created_at, id) < (");
        builder.push_bind(cursor.created_at);
        builder.push(", ");
        builder.push_bind(cursor.id);
        builder.push(")");
    }

    builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
    builder.push_bind(i64::from(limit) + 1);

    let rows = builder
        .build_query_as::<AuditLogRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    let mut logs = rows
        .into_iter()
        .map(AuditLog::try_from)
        .collect::<DomainResult<Vec<_>>>()?;

    let next = if logs.len() > limit as usize {
        logs.truncate(limit as usize);
        logs.last().and_then(|log| {
            Some(AuditLogCursor::new(log.created_at?, log.id?))
        })
    } else {
        None
    };

    Ok((logs, next))
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, log: AuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (user_id, action, resource_type, resource_id, details, \
             ip_address, user_agent, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()))",
        )
        .bind(log.user_id.map(i64::from))
        .bind(&log.action)
        .bind(&log.resource_type)
        .bind(log.resource_id)
        .bind(&log.details)
        .bind(&log.ip_address)
        .bind(&log.user_agent)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        let builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {AUDIT_COLUMNS} FROM audit_logs WHERE TRUE"
        ));
        fetch_page(&self.pool, builder, limit, cursor).await
    }

    async fn find_by_user(
        &self,
        user_id: i64,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {AUDIT_COLUMNS} FROM audit_logs WHERE user_id = "
        ));
        builder.push_bind(user_id);
        fetch_page(&self.pool, builder, limit, cursor).await
    }

    async fn find_by_resource(
        &self,
        resource_type: &str,
        resource_id: i64,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {AUDIT_COLUMNS} FROM audit_logs WHERE resource_type = "
        ));
        builder.push_bind(resource_type.to_string());
        builder.push(" AND resource_id = ");
        builder.push_bind(resource_id);
        fetch_page(&self.pool, builder, limit, cursor).await
    }
}
