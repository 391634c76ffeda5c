// src/presentation/http/controllers/clients.rs
use crate::application::{
    commands::clients::{CreateClientCommand, DeleteClientCommand, UpdateClientCommand},
    dto::{ClientDto, CursorPage},
    queries::clients::ListClientsQuery,
};
use crate::domain::client::EntityKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    pub entity_kind: EntityKind,
    pub document_number: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Distinguishes an absent field (leave untouched) from an explicit
/// null (clear the column).
fn double_option<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListClientsParams {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub q: Option<String>,
    pub kind: Option<EntityKind>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 200, description = "Client created.", body = ClientDto),
        (status = 403, description = "Missing clients:create.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Document number already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Clients"
)]
pub async fn create_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateClientRequest>,
) -> HttpResult<Json<ClientDto>> {
    let command = CreateClientCommand {
        entity_kind: payload.entity_kind,
        document_number: payload.document_number,
        name: payload.name,
        contact_name: payload.contact_name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
    };

    state
        .services
        .client_commands()
        .create(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/clients",
    responses(
        (status = 200, description = "Page of clients, newest first.", body = crate::presentation::http::openapi::ClientListResponse),
        (status = 403, description = "Missing clients:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Clients"
)]
pub async fn list_clients(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListClientsParams>,
) -> HttpResult<Json<CursorPage<ClientDto>>> {
    let query = ListClientsQuery {
        limit: params.limit,
        cursor: params.cursor,
        search: params.q,
        kind: params.kind,
        include_inactive: params.include_inactive,
    };

    state
        .services
        .client_queries()
        .list(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    responses(
        (status = 200, description = "The requested client.", body = ClientDto),
        (status = 404, description = "No such client.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Clients"
)]
pub async fn get_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ClientDto>> {
    state
        .services
        .client_queries()
        .get(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/clients/{id}",
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client.", body = ClientDto),
        (status = 403, description = "Missing clients:update.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such client.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Clients"
)]
pub async fn update_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientRequest>,
) -> HttpResult<Json<ClientDto>> {
    let command = UpdateClientCommand {
        client_id: id,
        name: payload.name,
        contact_name: payload.contact_name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        is_active: payload.is_active,
    };

    state
        .services
        .client_commands()
        .update(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    responses(
        (status = 204, description = "Client deactivated."),
        (status = 403, description = "Missing clients:delete.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such client.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Clients"
)]
pub async fn delete_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .client_commands()
        .delete(&user, DeleteClientCommand { client_id: id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
