// src/infrastructure/repositories/postgres_event.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{SystemEvent, SystemEventCursor, SystemEventRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresSystemEventRepository {
    pool: PgPool,
}

impl PostgresSystemEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SystemEventRow {
    id: i64,
    event_type: String,
    details: Option<String>,
    metadata: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SystemEventRow> for SystemEvent {
    type Error = DomainError;

    fn try_from(row: SystemEventRow) -> Result<Self, Self::Error> {
        Ok(SystemEvent {
            id: Some(row.id),
            event_type: row.event_type,
            details: row.details,
            metadata: row.metadata,
            created_at: Some(row.created_at),
        })
    }
}

#[async_trait]
impl SystemEventRepository for PostgresSystemEventRepository {
    async fn insert(&self, event: SystemEvent) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO system_events (event_type, details, metadata, created_at)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))",
        )
        .bind(&event.event_type)
        .bind(&event.details)
        .bind(&event.metadata)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list(
        &self,
        event_type: Option<&str>,
        limit: u32,
        cursor: Option<SystemEventCursor>,
    ) -> DomainResult<(Vec<SystemEvent>, Option<SystemEventCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, event_type, details, metadata, created_at FROM system_events WHERE TRUE",
        );

        if let Some(event_type) = event_type {
            builder.push(" AND event_type = ");
            builder.push_bind(event_type.to_string());
        }

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
            .build_query_as::<SystemEventRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut events = rows
            .into_iter()
            .map(SystemEvent::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let next = if events.len() > limit as usize {
            events.truncate(limit as usize);
            events
                .last()
                .and_then(|event| Some(SystemEventCursor::new(event.created_at?, event.id?)))
        } else {
            None
        };

        Ok((events, next))
    }
}
