mod error;
mod postgres_activity;
mod postgres_audit_log;
mod postgres_client;
mod postgres_event;
mod postgres_inventory;
mod postgres_user;

pub(crate) use error::map_sqlx;

pub use postgres_activity::PostgresUserActivityRepository;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_client::PostgresClientRepository;
pub use postgres_event::PostgresSystemEventRepository;
pub use postgres_inventory::{
    PostgresKardexRepository, PostgresProductRepository, PostgresWarehouseRepository,
};
pub use postgres_user::PostgresUserRepository;
