pub mod activity;
pub mod audit;
pub mod auth;
pub mod clients;
pub mod events;
pub mod inventory;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use activity::UserActivityDto;
pub use audit::AuditLogDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use clients::ClientDto;
pub use events::SystemEventDto;
pub use inventory::{KardexEntryDto, ProductDto, WarehouseDto};
pub use pagination::CursorPage;
pub use users::{CapabilityView, UserDto, UserProfileDto};
