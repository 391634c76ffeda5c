mod capabilities;
mod get;
mod list;
mod profile;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
