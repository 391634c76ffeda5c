use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::client::ClientRepository;

pub struct ClientQueryService {
    pub(super) client_repo: Arc<dyn ClientRepository>,
}

impl ClientQueryService {
    pub fn new(client_repo: Arc<dyn ClientRepository>) -> Self {
        Self { client_repo }
    }

    pub(super) fn ensure_can_read(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if actor.has_capability("clients", "read") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "missing capability clients:read",
            ))
        }
    }
}
