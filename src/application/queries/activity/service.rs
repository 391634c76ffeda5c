use std::sync::Arc;

use crate::domain::activity::UserActivityRepository;

pub struct ActivityQueryService {
    pub(super) activity_repo: Arc<dyn UserActivityRepository>,
}

impl ActivityQueryService {
    pub fn new(activity_repo: Arc<dyn UserActivityRepository>) -> Self {
        Self { activity_repo }
    }
}
