mod capability;
mod create_product;
mod create_warehouse;
mod record_movement;
mod service;

pub use create_product::CreateProductCommand;
pub use create_warehouse::CreateWarehouseCommand;
pub use record_movement::RecordMovementCommand;
pub use service::InventoryCommandService;
