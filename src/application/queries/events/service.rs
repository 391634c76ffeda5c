use std::sync::Arc;

use crate::domain::event::SystemEventRepository;

pub struct SystemEventQueryService {
    pub(super) event_repo: Arc<dyn SystemEventRepository>,
}

impl SystemEventQueryService {
    pub fn new(event_repo: Arc<dyn SystemEventRepository>) -> Self {
        Self { event_repo }
    }
}
