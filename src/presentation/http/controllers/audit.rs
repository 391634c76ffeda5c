// src/presentation/http/controllers/audit.rs
use crate::application::{
    dto::{AuditLogDto, CursorPage},
    queries::audit::{AuditByResourceQuery, AuditByUserQuery, ListAuditLogsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuditPageParams {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/audit-logs",
    responses(
        (status = 200, description = "Page of audit entries, newest first.", body = crate::presentation::http::openapi::AuditLogListResponse),
        (status = 403, description = "Missing audit:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<AuditPageParams>,
) -> HttpResult<Json<CursorPage<AuditLogDto>>> {
    let query = ListAuditLogsQuery {
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .audit_queries()
        .list(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit-logs/user/{id}",
    responses(
        (status = 200, description = "Audit entries recorded for one user.", body = crate::presentation::http::openapi::AuditLogListResponse),
        (status = 403, description = "Missing audit:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Audit"
)]
pub async fn audit_logs_by_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<AuditPageParams>,
) -> HttpResult<Json<CursorPage<AuditLogDto>>> {
    let query = AuditByUserQuery {
        user_id: id,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .audit_queries()
        .by_user(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit-logs/resource/{resource_type}/{resource_id}",
    responses(
        (status = 200, description = "Audit entries touching one resource.", body = crate::presentation::http::openapi::AuditLogListResponse),
        (status = 403, description = "Missing audit:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Audit"
)]
pub async fn audit_logs_by_resource(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((resource_type, resource_id)): Path<(String, i64)>,
    Query(params): Query<AuditPageParams>,
) -> HttpResult<Json<CursorPage<AuditLogDto>>> {
    let query = AuditByResourceQuery {
        resource_type,
        resource_id,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .audit_queries()
        .by_resource(&user, query)
        .await
        .into_http()
        .map(Json)
}
