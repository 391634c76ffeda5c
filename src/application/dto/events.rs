// src/application/dto/events.rs
use crate::domain::event::SystemEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemEventDto {
    pub id: i64,
    pub event_type: String,
    pub details: Option<String>,
    pub metadata: Option<serde_json::Value>,
    #[serde(with = "serde_time::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<SystemEvent> for SystemEventDto {
    fn from(e: SystemEvent) -> Self {
        Self {
            id: e.id.unwrap_or_default(),
            event_type: e.event_type,
            details: e.details,
            metadata: e.metadata,
            created_at: e.created_at,
        }
    }
}
