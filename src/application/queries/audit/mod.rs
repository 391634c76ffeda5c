mod by_resource;
mod by_user;
mod list;
mod service;

pub use by_resource::AuditByResourceQuery;
pub use by_user::AuditByUserQuery;
pub use list::ListAuditLogsQuery;
pub use service::AuditQueryService;
