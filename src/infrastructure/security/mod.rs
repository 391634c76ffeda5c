pub mod claims;
pub mod password;
pub mod session_store;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use session_store::InMemorySessionRevocationStore;
pub use token::BiscuitTokenManager;
