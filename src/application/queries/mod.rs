pub mod activity;
pub mod audit;
pub mod clients;
pub mod events;
pub mod inventory;
mod pagination;
pub mod users;

pub(crate) use pagination::normalize_limit;
