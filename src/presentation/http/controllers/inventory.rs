// src/presentation/http/controllers/inventory.rs
use crate::application::{
    commands::inventory::{CreateProductCommand, CreateWarehouseCommand, RecordMovementCommand},
    dto::{CursorPage, KardexEntryDto, ProductDto, WarehouseDto},
    queries::inventory::KardexReportQuery,
};
use crate::domain::inventory::MovementKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub sku: String,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWarehouseRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordMovementRequest {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct KardexReportParams {
    pub product_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub kind: Option<MovementKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StockParams {
    pub product_id: i64,
    pub warehouse_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockResponse {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub balance: i64,
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created.", body = ProductDto),
        (status = 403, description = "Missing inventory:manage.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "SKU already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = CreateProductCommand {
        sku: payload.sku,
        name: payload.name,
    };

    state
        .services
        .inventory_commands()
        .create_product(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/products",
    responses(
        (status = 200, description = "All products, ordered by SKU.", body = [ProductDto]),
        (status = 403, description = "Missing inventory:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .inventory_queries()
        .list_products(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/warehouses",
    request_body = CreateWarehouseRequest,
    responses(
        (status = 200, description = "Warehouse created.", body = WarehouseDto),
        (status = 403, description = "Missing inventory:manage.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Code already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn create_warehouse(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateWarehouseRequest>,
) -> HttpResult<Json<WarehouseDto>> {
    let command = CreateWarehouseCommand {
        code: payload.code,
        name: payload.name,
    };

    state
        .services
        .inventory_commands()
        .create_warehouse(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/warehouses",
    responses(
        (status = 200, description = "All warehouses, ordered by code.", body = [WarehouseDto]),
        (status = 403, description = "Missing inventory:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn list_warehouses(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<WarehouseDto>>> {
    state
        .services
        .inventory_queries()
        .list_warehouses(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/movements",
    request_body = RecordMovementRequest,
    responses(
        (status = 200, description = "Movement recorded; returns the new kardex row.", body = KardexEntryDto),
        (status = 400, description = "Invalid quantity or stock underflow.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing inventory:record.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown product or warehouse.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn record_movement(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<RecordMovementRequest>,
) -> HttpResult<Json<KardexEntryDto>> {
    let command = RecordMovementCommand {
        product_id: payload.product_id,
        warehouse_id: payload.warehouse_id,
        kind: payload.kind,
        quantity: payload.quantity,
        reference: payload.reference,
    };

    state
        .services
        .inventory_commands()
        .record_movement(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/kardex",
    responses(
        (status = 200, description = "Kardex report page, newest first.", body = crate::presentation::http::openapi::KardexListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing inventory:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn kardex_report(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<KardexReportParams>,
) -> HttpResult<Json<CursorPage<KardexEntryDto>>> {
    let query = KardexReportQuery {
        product_id: params.product_id,
        warehouse_id: params.warehouse_id,
        kind: params.kind,
        from: params.from,
        to: params.to,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .inventory_queries()
        .kardex_report(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/stock",
    responses(
        (status = 200, description = "Current balance for a product/warehouse pair.", body = StockResponse),
        (status = 403, description = "Missing inventory:read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Inventory"
)]
pub async fn stock_balance(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<StockParams>,
) -> HttpResult<Json<StockResponse>> {
    let balance = state
        .services
        .inventory_queries()
        .stock_balance(&user, params.product_id, params.warehouse_id)
        .await
        .map_err(HttpError::from_error)?;

    Ok(Json(StockResponse {
        product_id: params.product_id,
        warehouse_id: params.warehouse_id,
        balance,
    }))
}
