use super::{InventoryCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::inventory::{NewProduct, Sku},
};

pub struct CreateProductCommand {
    pub sku: String,
    pub name: String,
}

impl InventoryCommandService {
    pub async fn create_product(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_capability(actor, "manage")?;

        let sku = Sku::new(command.sku)?;
        if self.product_repo.find_by_sku(&sku).await?.is_some() {
            return Err(ApplicationError::conflict("sku already exists"));
        }

        let new_product = NewProduct::new(sku, command.name, self.clock.now())?;
        let product = self.product_repo.insert(new_product).await?;
        Ok(product.into())
    }
}
