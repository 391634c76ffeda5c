// src/presentation/http/controllers/events.rs
use crate::application::{
    commands::events::RecordSystemEventCommand,
    dto::{CursorPage, SystemEventDto},
    queries::events::ListSystemEventsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SystemEventParams {
    pub event_type: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordEventRequest {
    pub event_type: String,
    pub details: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[utoipa::path(
    get,
    path = "/api/v1/system-events",
    responses(
        (status = 200, description = "Page of system events, newest first.", body = crate::presentation::http::openapi::SystemEventListResponse),
        (status = 403, description = "Missing events:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "System"
)]
pub async fn list_system_events(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<SystemEventParams>,
) -> HttpResult<Json<CursorPage<SystemEventDto>>> {
    let query = ListSystemEventsQuery {
        event_type: params.event_type,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .event_queries()
        .list(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/system-events",
    request_body = RecordEventRequest,
    responses(
        (status = 204, description = "Event recorded."),
        (status = 400, description = "Empty event type.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing events:record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "System"
)]
pub async fn record_system_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<RecordEventRequest>,
) -> HttpResult<StatusCode> {
    let command = RecordSystemEventCommand {
        event_type: payload.event_type,
        details: payload.details,
        metadata: payload.metadata,
    };

    state
        .services
        .event_commands()
        .record(&user, command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
