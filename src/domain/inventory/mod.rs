// src/domain/inventory/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    KardexEntry, KardexFilter, KardexMovement, NewMovement, NewProduct, NewWarehouse, Product,
    Warehouse,
};
pub use repository::{KardexRepository, ProductRepository, WarehouseRepository};
pub use value_objects::{KardexCursor, MovementKind, ProductId, Sku, WarehouseId};
