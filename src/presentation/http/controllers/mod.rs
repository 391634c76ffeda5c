pub mod activity;
pub mod audit;
pub mod auth;
pub mod clients;
pub mod events;
pub mod inventory;
pub mod users;
