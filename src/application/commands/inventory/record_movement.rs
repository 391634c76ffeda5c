use super::{InventoryCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, KardexEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::inventory::{MovementKind, NewMovement, ProductId, WarehouseId},
};

pub struct RecordMovementCommand {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reference: Option<String>,
}

impl InventoryCommandService {
    /// Records a kardex movement. The repository computes the resulting
    /// balance inside a transaction so concurrent movements for the same
    /// product/warehouse pair serialize.
    pub async fn record_movement(
        &self,
        actor: &AuthenticatedUser,
        command: RecordMovementCommand,
    ) -> ApplicationResult<KardexEntryDto> {
        ensure_capability(actor, "record")?;

        let product_id = ProductId::new(command.product_id)?;
        let warehouse_id = WarehouseId::new(command.warehouse_id)?;

        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        if !product.is_active {
            return Err(ApplicationError::validation("product is inactive"));
        }
        if self
            .warehouse_repo
            .find_by_id(warehouse_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::not_found("warehouse not found"));
        }

        let movement = NewMovement::new(
            product_id,
            warehouse_id,
            command.kind,
            command.quantity,
            command.reference,
            Some(actor.id),
            self.clock.now(),
        )?;

        let entry = self.kardex_repo.record(movement).await?;
        Ok(entry.into())
    }
}
