// src/domain/client/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Client, ClientUpdate, NewClient};
pub use repository::ClientRepository;
pub use value_objects::{ClientId, ClientListCursor, DocumentNumber, EntityKind};
