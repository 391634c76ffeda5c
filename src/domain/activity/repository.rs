// src/domain/activity/repository.rs
use crate::domain::activity::entity::{UserActivity, UserActivityCursor};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserActivityRepository: Send + Sync {
    async fn insert(&self, activity: UserActivity) -> DomainResult<()>;

    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: u32,
        cursor: Option<UserActivityCursor>,
    ) -> DomainResult<(Vec<UserActivity>, Option<UserActivityCursor>)>;
}
