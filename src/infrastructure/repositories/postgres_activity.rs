// src/infrastructure/repositories/postgres_activity.rs
use super::map_sqlx;
use crate::domain::activity::{UserActivity, UserActivityCursor, UserActivityRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserActivityRepository {
    pool: PgPool,
}

impl PostgresUserActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserActivityRow {
    id: i64,
    user_id: i64,
    action: String,
    path: Option<String>,
    detail: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserActivityRow> for UserActivity {
    type Error = DomainError;

    fn try_from(row: UserActivityRow) -> Result<Self, Self::Error> {
        Ok(UserActivity {
            id: Some(row.id),
            user_id: UserId::new(row.user_id)?,
            action: row.action,
            path: row.path,
            detail: row.detail,
            created_at: Some(row.created_at),
        })
    }
}

#[async_trait]
impl UserActivityRepository for PostgresUserActivityRepository {
    async fn insert(&self, activity: UserActivity) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO user_activity (user_id, action, path, detail, created_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))",
        )
        .bind(i64::from(activity.user_id))
        .bind(&activity.action)
        .bind(&activity.path)
        .bind(&activity.detail)
        .bind(activity.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: u32,
        cursor: Option<UserActivityCursor>,
    ) -> DomainResult<(Vec<UserActivity>, Option<UserActivityCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, user_id, action, path, detail, created_at FROM user_activity \
             WHERE user_id = ",
        );
        builder.push_bind(i64::from(user_id));

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
            .build_query_as::<UserActivityRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut entries = rows
            .into_iter()
            .map(UserActivity::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let next = if entries.len() > limit as usize {
            entries.truncate(limit as usize);
            entries
                .last()
                .and_then(|entry| Some(UserActivityCursor::new(entry.created_at?, entry.id?)))
        } else {
            None
        };

        Ok((entries, next))
    }
}
