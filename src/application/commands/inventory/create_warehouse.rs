use super::{InventoryCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, WarehouseDto},
        error::ApplicationResult,
    },
    domain::inventory::NewWarehouse,
};

pub struct CreateWarehouseCommand {
    pub code: String,
    pub name: String,
}

impl InventoryCommandService {
    pub async fn create_warehouse(
        &self,
        actor: &AuthenticatedUser,
        command: CreateWarehouseCommand,
    ) -> ApplicationResult<WarehouseDto> {
        ensure_capability(actor, "manage")?;

        let new_warehouse = NewWarehouse::new(command.code, command.name, self.clock.now())?;
        let warehouse = self.warehouse_repo.insert(new_warehouse).await?;
        Ok(warehouse.into())
    }
}
