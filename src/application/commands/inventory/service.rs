use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::inventory::{KardexRepository, ProductRepository, WarehouseRepository};

pub struct InventoryCommandService {
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) warehouse_repo: Arc<dyn WarehouseRepository>,
    pub(super) kardex_repo: Arc<dyn KardexRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl InventoryCommandService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        warehouse_repo: Arc<dyn WarehouseRepository>,
        kardex_repo: Arc<dyn KardexRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            product_repo,
            warehouse_repo,
            kardex_repo,
            clock,
        }
    }
}
