// src/domain/event/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{SystemEvent, SystemEventCursor};
pub use repository::SystemEventRepository;
