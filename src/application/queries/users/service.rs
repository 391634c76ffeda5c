use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub(super) fn ensure_can_read(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if actor.has_capability("users", "read") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("missing capability users:read"))
        }
    }
}
