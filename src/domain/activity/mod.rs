// src/domain/activity/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{UserActivity, UserActivityCursor};
pub use repository::UserActivityRepository;
