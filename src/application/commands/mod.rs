pub mod clients;
pub mod events;
pub mod inventory;
pub mod users;
