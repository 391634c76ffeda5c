use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::client::ClientRepository;

pub struct ClientCommandService {
    pub(super) client_repo: Arc<dyn ClientRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ClientCommandService {
    pub fn new(client_repo: Arc<dyn ClientRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { client_repo, clock }
    }
}
