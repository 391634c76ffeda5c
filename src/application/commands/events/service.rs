use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::event::SystemEventRepository;

pub struct SystemEventCommandService {
    pub(super) event_repo: Arc<dyn SystemEventRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SystemEventCommandService {
    pub fn new(event_repo: Arc<dyn SystemEventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { event_repo, clock }
    }
}
