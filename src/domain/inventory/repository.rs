// src/domain/inventory/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::inventory::{
    entity::{KardexEntry, KardexFilter, NewMovement, NewProduct, NewWarehouse, Product, Warehouse},
    value_objects::{KardexCursor, ProductId, Sku, WarehouseId},
};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, new_product: NewProduct) -> DomainResult<Product>;

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;

    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>>;

    async fn list(&self) -> DomainResult<Vec<Product>>;
}

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn insert(&self, new_warehouse: NewWarehouse) -> DomainResult<Warehouse>;

    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>>;

    async fn list(&self) -> DomainResult<Vec<Warehouse>>;
}

#[async_trait]
pub trait KardexRepository: Send + Sync {
    /// Persist a movement, computing the post-movement balance atomically
    /// against the current stock of the product/warehouse pair.
    async fn record(&self, movement: NewMovement) -> DomainResult<KardexEntry>;

    /// Current balance for a product in a warehouse (0 when no movements).
    async fn balance(&self, product_id: ProductId, warehouse_id: WarehouseId)
    -> DomainResult<i64>;

    /// Filtered report page, newest first, joined with product and
    /// warehouse reference data.
    async fn list_page(
        &self,
        filter: &KardexFilter,
        limit: u32,
        cursor: Option<KardexCursor>,
    ) -> DomainResult<(Vec<KardexEntry>, Option<KardexCursor>)>;
}
