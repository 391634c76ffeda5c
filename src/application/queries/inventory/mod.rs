mod kardex;
mod reference;
mod service;

pub use kardex::KardexReportQuery;
pub use service::InventoryQueryService;
