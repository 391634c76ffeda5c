mod list;
mod service;

pub use list::UserActivityQuery;
pub use service::ActivityQueryService;
