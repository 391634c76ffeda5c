// src/domain/client/entity.rs
use crate::domain::client::value_objects::{ClientId, DocumentNumber, EntityKind};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub entity_kind: EntityKind,
    pub document_number: DocumentNumber,
    /// Person: given + family name. Company: legal name in `name`.
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub entity_kind: EntityKind,
    pub document_number: DocumentNumber,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl NewClient {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        entity_kind: EntityKind,
        document_number: DocumentNumber,
        name: impl Into<String>,
        contact_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        created_by: Option<UserId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("client name cannot be empty".into()));
        }
        Ok(Self {
            entity_kind,
            document_number,
            name,
            contact_name,
            email,
            phone,
            address,
            created_by,
            created_at,
        })
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub contact_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.is_active.is_none()
    }
}
