use super::InventoryQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ProductDto, WarehouseDto},
    error::ApplicationResult,
};

impl InventoryQueryService {
    pub async fn list_products(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ProductDto>> {
        self.ensure_can_read(actor)?;
        let products = self.product_repo.list().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn list_warehouses(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<WarehouseDto>> {
        self.ensure_can_read(actor)?;
        let warehouses = self.warehouse_repo.list().await?;
        Ok(warehouses.into_iter().map(WarehouseDto::from).collect())
    }
}
