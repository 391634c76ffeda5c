// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{activity, audit, auth, clients, events, inventory, users},
    middleware::audit::audit_middleware,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    AllowOrigin::list(parsed)
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/users", get(users::list_users))
        .route(
            "/api/v1/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/v1/users/{id}/change-password",
            post(users::change_password),
        )
        .route("/api/v1/users/{id}/activity", get(activity::user_activity))
        .route("/api/v1/permissions", get(users::list_permissions))
        .route(
            "/api/v1/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/api/v1/clients/{id}",
            get(clients::get_client)
                .patch(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/api/v1/audit-logs", get(audit::list_audit_logs))
        .route("/api/v1/audit-logs/user/{id}", get(audit::audit_logs_by_user))
        .route(
            "/api/v1/audit-logs/resource/{resource_type}/{resource_id}",
            get(audit::audit_logs_by_resource),
        )
        .route(
            "/api/v1/system-events",
            get(events::list_system_events).post(events::record_system_event),
        )
        .route(
            "/api/v1/inventory/products",
            get(inventory::list_products).post(inventory::create_product),
        )
        .route(
            "/api/v1/inventory/warehouses",
            get(inventory::list_warehouses).post(inventory::create_warehouse),
        )
        .route(
            "/api/v1/inventory/movements",
            post(inventory::record_movement),
        )
        .route("/api/v1/inventory/kardex", get(inventory::kardex_report))
        .route("/api/v1/inventory/stock", get(inventory::stock_balance))
        .layer(from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
