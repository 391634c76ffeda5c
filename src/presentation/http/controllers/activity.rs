// src/presentation/http/controllers/activity.rs
use crate::application::{
    dto::{CursorPage, UserActivityDto},
    queries::activity::UserActivityQuery,
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
pub struct ActivityPageParams {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/activity",
    responses(
        (status = 200, description = "Activity feed for one user, newest first.", body = crate::presentation::http::openapi::UserActivityListResponse),
        (status = 403, description = "Not your feed and missing activity:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Activity"
)]
pub async fn user_activity(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<ActivityPageParams>,
) -> HttpResult<Json<CursorPage<UserActivityDto>>> {
    let query = UserActivityQuery {
        user_id: id,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .activity_queries()
        .for_user(&user, query)
        .await
        .into_http()
        .map(Json)
}
