// src/application/dto/inventory.rs
use crate::domain::inventory::{KardexEntry, MovementKind, Product, Warehouse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into(),
            sku: p.sku.to_string(),
            name: p.name,
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WarehouseDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Warehouse> for WarehouseDto {
    fn from(w: Warehouse) -> Self {
        Self {
            id: w.id.into(),
            code: w.code,
            name: w.name,
            created_at: w.created_at,
        }
    }
}

/// One kardex report row: the movement plus joined reference data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KardexEntryDto {
    pub id: i64,
    pub product_id: i64,
    pub product_sku: String,
    pub product_name: String,
    pub warehouse_id: i64,
    pub warehouse_code: String,
    pub kind: MovementKind,
    pub quantity: i64,
    pub balance: i64,
    pub reference: Option<String>,
    pub created_by: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<KardexEntry> for KardexEntryDto {
    fn from(entry: KardexEntry) -> Self {
        let m = entry.movement;
        Self {
            id: m.id,
            product_id: m.product_id.into(),
            product_sku: entry.product_sku.to_string(),
            product_name: entry.product_name,
            warehouse_id: m.warehouse_id.into(),
            warehouse_code: entry.warehouse_code,
            kind: m.kind,
            quantity: m.quantity,
            balance: m.balance,
            reference: m.reference,
            created_by: m.created_by.map(Into::into),
            created_at: m.created_at,
        }
    }
}
