// src/application/dto/activity.rs
use crate::domain::activity::UserActivity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserActivityDto {
    pub id: i64,
    pub user_id: i64,
    pub action: String,
    pub path: Option<String>,
    pub detail: Option<String>,
    #[serde(with = "serde_time::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserActivity> for UserActivityDto {
    fn from(a: UserActivity) -> Self {
        Self {
            id: a.id.unwrap_or_default(),
            user_id: a.user_id.into(),
            action: a.action,
            path: a.path,
            detail: a.detail,
            created_at: a.created_at,
        }
    }
}
