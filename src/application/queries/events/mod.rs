mod list;
mod service;

pub use list::ListSystemEventsQuery;
pub use service::SystemEventQueryService;
