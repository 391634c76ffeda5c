mod capability;
mod change_password;
mod delete;
mod login;
mod logout;
mod password;
mod register;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use delete::DeleteUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
