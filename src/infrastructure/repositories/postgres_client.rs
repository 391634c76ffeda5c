// src/infrastructure/repositories/postgres_client.rs
use super::map_sqlx;
use crate::domain::client::{
    Client, ClientId, ClientListCursor, ClientRepository, ClientUpdate, DocumentNumber, EntityKind,
    NewClient,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CLIENT_COLUMNS: &str = "id, entity_kind, document_number, name, contact_name, email, \
     phone, address, is_active, created_by, updated_by, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ClientRow {
    id: i64,
    entity_kind: String,
    document_number: String,
    name: String,
    contact_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    is_active: bool,
    created_by: Option<i64>,
    updated_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for Client {
    type Error = DomainError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId::new(row.id)?,
            entity_kind: row.entity_kind.parse()?,
            document_number: DocumentNumber::new(row.document_number)?,
            name: row.name,
            contact_name: row.contact_name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            is_active: row.is_active,
            created_by: row.created_by.map(UserId::new).transpose()?,
            updated_by: row.updated_by.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn insert(&self, new_client: NewClient) -> DomainResult<Client> {
        let NewClient {
            entity_kind,
            document_number,
            name,
            contact_name,
            email,
            phone,
            address,
            created_by,
            created_at,
        } = new_client;

        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "INSERT INTO clients (entity_kind, document_number, name, contact_name, email, \
             phone, address, is_active, created_by, updated_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $8, $9, $9)
             RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(entity_kind.as_str())
        .bind(document_number.as_str())
        .bind(&name)
        .bind(&contact_name)
        .bind(&email)
        .bind(&phone)
        .bind(&address)
        .bind(created_by.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Client::try_from(row)
    }

    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Client::try_from).transpose()
    }

    async fn find_by_document(&self, document: &DocumentNumber) -> DomainResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE document_number = $1"
        ))
        .bind(document.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Client::try_from).transpose()
    }

    async fn update(
        &self,
        id: ClientId,
        update: ClientUpdate,
        updated_by: Option<UserId>,
    ) -> DomainResult<Client> {
        let ClientUpdate {
            name,
            contact_name,
            email,
            phone,
            address,
            is_active,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE clients SET updated_at = ");
        builder.push_bind(Utc::now());
        builder.push(", updated_by = ");
        builder.push_bind(updated_by.map(i64::from));

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name);
        }
        if let Some(contact_name) = contact_name {
            builder.push(", contact_name = ");
            builder.push_bind(contact_name);
        }
        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(email);
        }
        if let Some(phone) = phone {
            builder.push(", phone = ");
            builder.push_bind(phone);
        }
        if let Some(address) = address {
            builder.push(", address = ");
            builder.push_bind(address);
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {CLIENT_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ClientRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("client not found".into()))?;
        Client::try_from(row)
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ClientListCursor>,
        search: Option<&str>,
        kind: Option<EntityKind>,
        include_inactive: bool,
    ) -> DomainResult<(Vec<Client>, Option<ClientListCursor>)> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE TRUE"));

        if !include_inactive {
            builder.push(" AND is_active = TRUE");
        }

        if let Some(kind) = kind {
            builder.push(" AND entity_kind = ");
            builder.push_bind(kind.as_str());
        }

        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            let pattern = format!("%{term}%");
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR document_number ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(cursor) = cursor.as_ref() {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.client_id));
            builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit) + 1);

        let rows = builder
            .build_query_as::<ClientRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut clients = rows
            .into_iter()
            .map(Client::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let next = if clients.len() > limit as usize {
            clients.truncate(limit as usize);
            clients
                .last()
                .map(|client| ClientListCursor::new(client.created_at, client.id))
        } else {
            None
        };

        Ok((clients, next))
    }
}
