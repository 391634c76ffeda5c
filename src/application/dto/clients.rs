// src/application/dto/clients.rs
use crate::domain::client::{Client, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i64,
    pub entity_kind: EntityKind,
    pub document_number: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into(),
            entity_kind: client.entity_kind,
            document_number: client.document_number.to_string(),
            name: client.name,
            contact_name: client.contact_name,
            email: client.email,
            phone: client.phone,
            address: client.address,
            is_active: client.is_active,
            created_by: client.created_by.map(Into::into),
            updated_by: client.updated_by.map(Into::into),
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
