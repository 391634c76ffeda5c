mod capability;
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateClientCommand;
pub use delete::DeleteClientCommand;
pub use service::ClientCommandService;
pub use update::UpdateClientCommand;
