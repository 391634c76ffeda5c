pub mod activity;
pub mod audit;
pub mod client;
pub mod errors;
pub mod event;
pub mod inventory;
pub mod user;
