mod get;
mod list;
mod service;

pub use list::ListClientsQuery;
pub use service::ClientQueryService;
