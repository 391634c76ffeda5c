// src/presentation/http/openapi.rs
use crate::application::dto::{
    AuditLogDto, ClientDto, CursorPage, KardexEntryDto, SystemEventDto, UserActivityDto, UserDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

macro_rules! list_response {
    ($name:ident, $item:ty) => {
        #[derive(Debug, Serialize, Deserialize, ToSchema)]
        pub struct $name {
            pub items: Vec<$item>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub next_cursor: Option<String>,
            pub has_more: bool,
        }

        impl From<CursorPage<$item>> for $name {
            fn from(page: CursorPage<$item>) -> Self {
                Self {
                    items: page.items,
                    next_cursor: page.next_cursor,
                    has_more: page.has_more,
                }
            }
        }
    };
}

list_response!(UserListResponse, UserDto);
list_response!(ClientListResponse, ClientDto);
list_response!(AuditLogListResponse, AuditLogDto);
list_response!(UserActivityListResponse, UserActivityDto);
list_response!(SystemEventListResponse, SystemEventDto);
list_response!(KardexListResponse, KardexEntryDto);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::change_password,
        crate::presentation::http::controllers::users::delete_user,
        crate::presentation::http::controllers::users::list_permissions,
        crate::presentation::http::controllers::activity::user_activity,
        crate::presentation::http::controllers::clients::create_client,
        crate::presentation::http::controllers::clients::list_clients,
        crate::presentation::http::controllers::clients::get_client,
        crate::presentation::http::controllers::clients::update_client,
        crate::presentation::http::controllers::clients::delete_client,
        crate::presentation::http::controllers::audit::list_audit_logs,
        crate::presentation::http::controllers::audit::audit_logs_by_user,
        crate::presentation::http::controllers::audit::audit_logs_by_resource,
        crate::presentation::http::controllers::events::list_system_events,
        crate::presentation::http::controllers::events::record_system_event,
        crate::presentation::http::controllers::inventory::create_product,
        crate::presentation::http::controllers::inventory::list_products,
        crate::presentation::http::controllers::inventory::create_warehouse,
        crate::presentation::http::controllers::inventory::list_warehouses,
        crate::presentation::http::controllers::inventory::record_movement,
        crate::presentation::http::controllers::inventory::kardex_report,
        crate::presentation::http::controllers::inventory::stock_balance,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            UserListResponse,
            ClientListResponse,
            AuditLogListResponse,
            UserActivityListResponse,
            SystemEventListResponse,
            KardexListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::presentation::http::controllers::users::ChangePasswordRequest,
            crate::presentation::http::controllers::clients::CreateClientRequest,
            crate::presentation::http::controllers::clients::UpdateClientRequest,
            crate::presentation::http::controllers::events::RecordEventRequest,
            crate::presentation::http::controllers::inventory::CreateProductRequest,
            crate::presentation::http::controllers::inventory::CreateWarehouseRequest,
            crate::presentation::http::controllers::inventory::RecordMovementRequest,
            crate::presentation::http::controllers::inventory::StockResponse,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ClientDto,
            crate::application::dto::AuditLogDto,
            crate::application::dto::UserActivityDto,
            crate::application::dto::SystemEventDto,
            crate::application::dto::ProductDto,
            crate::application::dto::WarehouseDto,
            crate::application::dto::KardexEntryDto
        )
    ),
    tags(
        (name = "Auth", description = "Authentication and session endpoints"),
        (name = "Users", description = "User management endpoints"),
        (name = "Activity", description = "Per-user activity feeds"),
        (name = "Clients", description = "Client registry endpoints"),
        (name = "Audit", description = "Audit trail endpoints"),
        (name = "Inventory", description = "Products, warehouses and kardex"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Alexa Tech Admin API",
        description = "Back office for users, clients and inventory",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let http = Http::new(HttpAuthScheme::Bearer);
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
