use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::inventory::{KardexRepository, ProductRepository, WarehouseRepository};

pub struct InventoryQueryService {
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) warehouse_repo: Arc<dyn WarehouseRepository>,
    pub(super) kardex_repo: Arc<dyn KardexRepository>,
}

impl InventoryQueryService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        warehouse_repo: Arc<dyn WarehouseRepository>,
        kardex_repo: Arc<dyn KardexRepository>,
    ) -> Self {
        Self {
            product_repo,
            warehouse_repo,
            kardex_repo,
        }
    }

    pub(super) fn ensure_can_read(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if actor.has_capability("inventory", "read") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "missing capability inventory:read",
            ))
        }
    }
}
